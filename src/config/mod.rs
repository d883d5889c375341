//! Merge configuration
//!
//! Resolves the string/array policies and the string delimiter from:
//! 1. Built-in defaults (Merge, Merge, ',')
//! 2. Settings file (--config json-merge.toml)
//! 3. Environment variables
//! 4. CLI flags

mod settings;

pub use settings::{ConfigError, MergeSettings, SettingsLayer};
