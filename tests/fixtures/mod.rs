//! Test fixtures for merge assertions
//!
//! This module provides:
//! - The merge corpus (source/target pairs with expected results)
//! - An appsettings-style source/target/expected triple with comments

use std::path::{Path, PathBuf};

use json_merge::{MergeSettings, SettingsLayer};

/// Path to the merge corpus fixture
pub fn merge_corpus_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/merge_corpus/corpus.json")
}

/// Path to a file of the appsettings fixture
pub fn appsettings_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/appsettings")
        .join(name)
}

/// Merge test case from corpus.json
#[derive(Debug, Clone, serde::Deserialize)]
pub struct MergeTestCase {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub string_merge: Option<String>,
    #[serde(default)]
    pub array_merge: Option<String>,
    #[serde(default)]
    pub delimiter: Option<String>,
    pub source: serde_json::Value,
    pub target: serde_json::Value,
    #[serde(default)]
    pub expected: Option<serde_json::Value>,
    /// Key path the type mismatch error must name
    #[serde(default)]
    pub expected_error: Option<String>,
}

impl MergeTestCase {
    /// Settings for this case
    pub fn settings(&self) -> MergeSettings {
        let layer = SettingsLayer {
            string_merge: self.string_merge.clone(),
            array_merge: self.array_merge.clone(),
            delimiter: self.delimiter.clone(),
        };
        MergeSettings::resolve(&[layer]).expect("corpus settings are valid")
    }
}

/// Full merge corpus
#[derive(Debug, Clone, serde::Deserialize)]
pub struct MergeCorpus {
    pub schema_version: u32,
    pub description: String,
    pub test_cases: Vec<MergeTestCase>,
}

impl MergeCorpus {
    /// Load corpus from the fixture file
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = merge_corpus_path();
        let content = std::fs::read_to_string(&path)?;
        let corpus: MergeCorpus = serde_json::from_str(&content)?;
        Ok(corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_corpus_loads() {
        let corpus = MergeCorpus::load().expect("Failed to load corpus");
        assert_eq!(corpus.schema_version, 1);
        assert!(corpus.test_cases.len() >= 10, "Expected at least 10 test cases");
    }

    #[test]
    fn test_corpus_cases_have_one_expectation() {
        let corpus = MergeCorpus::load().expect("Failed to load corpus");
        for case in &corpus.test_cases {
            assert!(
                case.expected.is_some() != case.expected_error.is_some(),
                "case {} must have exactly one of expected/expected_error",
                case.id
            );
        }
    }

    #[test]
    fn test_appsettings_fixture_exists() {
        for name in ["source.json", "target.json", "expected.json"] {
            assert!(appsettings_path(name).exists(), "missing fixture {}", name);
        }
    }
}
