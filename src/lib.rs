//! json-merge - merge a JSON template into a target JSON document
//!
//! The source document's values are applied onto the target document:
//! objects are deep-merged, arrays and delimited strings are unioned or
//! replaced according to their [`MergePolicy`], and scalars are replaced.

pub mod config;
pub mod document;
pub mod merge;
pub mod runner;

pub use config::{ConfigError, MergeSettings, SettingsLayer};
pub use document::{DocumentError, DocumentRole};
pub use merge::{MergeError, MergeOptions, MergePolicy, Merger, ValueKind};
pub use runner::{MergeFiles, Output, RunError};
