//! Recursive object merge
//!
//! Merge semantics, per key of the source object:
//! - Missing in target: copied from source
//! - Null in target: backfilled with the source value
//! - Objects: deep-merged by key (recursive)
//! - Arrays: delegated to the array merge
//! - Strings: delegated to the delimited string merge
//! - Numbers and bools: source wins
//! - Kinds differ: the whole merge fails
//!
//! Keys only present in the target are kept in place. New keys are appended
//! after them in source order.

use serde_json::{Map, Value};
use tracing::debug;

use super::array::merge_arrays;
use super::kind::ValueKind;
use super::string::merge_strings;
use super::{MergeError, MergeOptions};

/// Path of the document root in error messages
pub const ROOT_PATH: &str = "$";

/// Merge the `source` object into a copy of the `target` object.
///
/// `path` names `target` within the document and is only used for errors.
pub fn merge_objects(
    source: &Map<String, Value>,
    target: &Map<String, Value>,
    options: &MergeOptions,
    path: &str,
) -> Result<Map<String, Value>, MergeError> {
    let mut merged = target.clone();

    for (key, source_value) in source {
        let target_value = match target.get(key) {
            None => {
                debug!(path, key = %key, "adding key from source");
                merged.insert(key.clone(), source_value.clone());
                continue;
            }
            Some(Value::Null) => {
                debug!(path, key = %key, "backfilling null target value");
                merged.insert(key.clone(), source_value.clone());
                continue;
            }
            Some(value) => value,
        };

        let value = match (source_value, target_value) {
            (Value::Object(source_map), Value::Object(target_map)) => {
                let child = child_path(path, key);
                Value::Object(merge_objects(source_map, target_map, options, &child)?)
            }
            (Value::Array(source_items), Value::Array(target_items)) => Value::Array(
                merge_arrays(target_items, source_items, options.array_policy),
            ),
            (Value::String(source_text), Value::String(target_text)) => {
                Value::String(merge_strings(
                    target_text,
                    source_text,
                    options.string_policy,
                    options.delimiter,
                ))
            }
            (source_value, target_value)
                if ValueKind::of(source_value) == ValueKind::of(target_value) =>
            {
                source_value.clone()
            }
            (source_value, target_value) => {
                return Err(MergeError::TypeMismatch {
                    path: child_path(path, key),
                    source_kind: ValueKind::of(source_value),
                    target_kind: ValueKind::of(target_value),
                });
            }
        };

        merged.insert(key.clone(), value);
    }

    Ok(merged)
}

fn child_path(parent: &str, key: &str) -> String {
    format!("{}.{}", parent, key)
}
