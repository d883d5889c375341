//! Merge orchestration
//!
//! Loads the source and target files, parses both, merges the source into
//! the target and writes the result back over the target. Nothing is written
//! unless every earlier stage succeeded.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::ConfigError;
use crate::document::{self, DocumentError, DocumentRole};
use crate::merge::{MergeError, MergeOptions, Merger};

/// Exit code on success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for any config, load, parse, merge or save failure
pub const EXIT_FAILURE: i32 = 1;

/// Exit code when no source path was given (clap keeps 2 for usage errors)
pub const EXIT_MISSING_SOURCE: i32 = 254;

/// Exit code when no target path was given
pub const EXIT_MISSING_TARGET: i32 = 253;

/// Run errors
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Source file path was not provided")]
    MissingSourcePath,

    #[error("Target json file path was not provided")]
    MissingTargetPath,

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Document(#[from] DocumentError),

    #[error("error merging objects: {0}")]
    Merge(#[from] MergeError),
}

impl RunError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::MissingSourcePath => EXIT_MISSING_SOURCE,
            RunError::MissingTargetPath => EXIT_MISSING_TARGET,
            RunError::Config(_) => EXIT_FAILURE,
            RunError::Document(_) => EXIT_FAILURE,
            RunError::Merge(_) => EXIT_FAILURE,
        }
    }
}

/// Where the merged document goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Output {
    /// Overwrite the target file
    #[default]
    Target,
    /// Leave the target alone; the caller prints the returned text
    Stdout,
}

/// A source → target merge between two files
#[derive(Debug, Clone)]
pub struct MergeFiles {
    source_path: PathBuf,
    target_path: PathBuf,
    options: MergeOptions,
    output: Output,
}

impl MergeFiles {
    /// Create a merge with default options
    pub fn new(source_path: impl Into<PathBuf>, target_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            target_path: target_path.into(),
            options: MergeOptions::default(),
            output: Output::default(),
        }
    }

    /// Create a merge from possibly-missing positional paths
    pub fn from_paths(
        source_path: Option<PathBuf>,
        target_path: Option<PathBuf>,
    ) -> Result<Self, RunError> {
        let source_path = source_path.ok_or(RunError::MissingSourcePath)?;
        let target_path = target_path.ok_or(RunError::MissingTargetPath)?;
        Ok(Self::new(source_path, target_path))
    }

    /// Set merge options
    pub fn with_options(mut self, options: MergeOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the output destination
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Run the merge, returning the merged document text
    pub fn execute(&self) -> Result<String, RunError> {
        let source_text = self.load(DocumentRole::Source, &self.source_path)?;
        let target_text = self.load(DocumentRole::Target, &self.target_path)?;

        let source = self.parse(DocumentRole::Source, &self.source_path, &source_text)?;
        let target = self.parse(DocumentRole::Target, &self.target_path, &target_text)?;

        debug!(
            string_policy = %self.options.string_policy,
            array_policy = %self.options.array_policy,
            delimiter = %self.options.delimiter,
            "merging documents"
        );
        let merged = Merger::new(self.options).merge_documents(&source, &target)?;
        let merged_text = document::to_pretty_text(&merged)?;

        if self.output == Output::Target {
            document::write_atomic(&self.target_path, &merged_text)?;
            self.status("Success merging json files and updating target file.");
        }

        Ok(merged_text)
    }

    fn load(&self, role: DocumentRole, path: &Path) -> Result<String, DocumentError> {
        self.status(&format!("Loading {} file from path: {}", role, path.display()));
        document::load(role, path)
    }

    fn parse(&self, role: DocumentRole, path: &Path, text: &str) -> Result<Value, DocumentError> {
        self.status(&format!("Parsing json for {} file", role));
        document::parse(role, path, text)
    }

    /// Progress goes to stdout unless stdout carries the merged document
    fn status(&self, message: &str) {
        match self.output {
            Output::Target => println!("{}", message),
            Output::Stdout => eprintln!("{}", message),
        }
    }
}
