//! Merge engine
//!
//! Merges a source JSON document into a target JSON document:
//! - Objects are always deep-merged
//! - Arrays and strings follow a configurable [`MergePolicy`]
//! - Numbers and bools are replaced by the source
//! - Null target fields are backfilled from the source
//!
//! The engine never mutates its inputs; it returns a new tree.

mod array;
mod kind;
mod policy;
mod string;
mod tree;

pub use array::merge_arrays;
pub use kind::ValueKind;
pub use policy::{MergePolicy, ParsePolicyError};
pub use string::{merge_strings, DEFAULT_DELIMITER};
pub use tree::ROOT_PATH;

use serde_json::{Map, Value};

/// Options consumed by the merge engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    /// Policy for values that are strings on both sides
    pub string_policy: MergePolicy,

    /// Policy for values that are arrays on both sides
    pub array_policy: MergePolicy,

    /// Token delimiter for the string merge
    pub delimiter: char,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            string_policy: MergePolicy::Merge,
            array_policy: MergePolicy::Merge,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// Merge errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    #[error("type mismatch at {path}: source is {source_kind}, target is {target_kind}")]
    TypeMismatch {
        path: String,
        source_kind: ValueKind,
        target_kind: ValueKind,
    },

    #[error("unsupported {kind} value at {path}: documents must be JSON objects")]
    UnsupportedKind { path: String, kind: ValueKind },
}

/// Merge engine configured with a set of [`MergeOptions`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Merger {
    options: MergeOptions,
}

impl Merger {
    /// Create a merger with the given options
    pub fn new(options: MergeOptions) -> Self {
        Self { options }
    }

    /// The options this merger applies
    pub fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Merge two whole documents. Both roots must be objects.
    pub fn merge_documents(&self, source: &Value, target: &Value) -> Result<Value, MergeError> {
        let source = as_root_object(source)?;
        let target = as_root_object(target)?;
        self.merge_objects(source, target).map(Value::Object)
    }

    /// Merge the `source` object into a copy of `target`
    pub fn merge_objects(
        &self,
        source: &Map<String, Value>,
        target: &Map<String, Value>,
    ) -> Result<Map<String, Value>, MergeError> {
        tree::merge_objects(source, target, &self.options, ROOT_PATH)
    }
}

fn as_root_object(value: &Value) -> Result<&Map<String, Value>, MergeError> {
    value.as_object().ok_or_else(|| MergeError::UnsupportedKind {
        path: ROOT_PATH.to_string(),
        kind: ValueKind::of(value),
    })
}
