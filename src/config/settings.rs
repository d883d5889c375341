//! Merge settings (json-merge.toml)
//!
//! Layer precedence, lowest to highest:
//! built-in defaults → settings file → environment → CLI flags.
//! Environment and CLI flags arrive together as one override layer, since
//! clap resolves a flag before its environment variable.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::merge::{MergeOptions, MergePolicy, ParsePolicyError, DEFAULT_DELIMITER};

/// Error types for config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid merge policy: {0}")]
    InvalidPolicy(#[from] ParsePolicyError),

    #[error("Invalid delimiter '{0}': must be exactly one character")]
    InvalidDelimiter(String),
}

/// One layer of settings, every field optional
///
/// This is both the settings file format and the shape of CLI/env overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsLayer {
    /// Policy for string values: "merge" or "clobber"
    pub string_merge: Option<String>,

    /// Policy for array values: "merge" or "clobber"
    pub array_merge: Option<String>,

    /// Token delimiter for string merges (one character)
    pub delimiter: Option<String>,
}

impl SettingsLayer {
    /// Load a settings file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse settings from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

/// Resolved merge settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSettings {
    pub string_merge: MergePolicy,
    pub array_merge: MergePolicy,
    pub delimiter: char,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            string_merge: MergePolicy::Merge,
            array_merge: MergePolicy::Merge,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl MergeSettings {
    /// Resolve layers in order (first is lowest precedence) over the defaults
    pub fn resolve<'a, I>(layers: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = &'a SettingsLayer>,
    {
        layers
            .into_iter()
            .try_fold(Self::default(), |settings, layer| settings.apply(layer))
    }

    /// Apply one layer on top of these settings
    pub fn apply(mut self, layer: &SettingsLayer) -> Result<Self, ConfigError> {
        if let Some(ref policy) = layer.string_merge {
            self.string_merge = policy.parse()?;
        }
        if let Some(ref policy) = layer.array_merge {
            self.array_merge = policy.parse()?;
        }
        if let Some(ref delimiter) = layer.delimiter {
            self.delimiter = parse_delimiter(delimiter)?;
        }
        Ok(self)
    }

    /// Options for the merge engine
    pub fn options(&self) -> MergeOptions {
        MergeOptions {
            string_policy: self.string_merge,
            array_policy: self.array_merge,
            delimiter: self.delimiter,
        }
    }
}

fn parse_delimiter(s: &str) -> Result<char, ConfigError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidDelimiter(s.to_string())),
    }
}
