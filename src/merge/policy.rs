//! Merge policies for strings and arrays

use std::str::FromStr;

/// Conflict policy for a mergeable kind
///
/// `Merge` unions the target and source contents; `Clobber` replaces the
/// target with the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    #[default]
    Merge,
    Clobber,
}

impl MergePolicy {
    /// Returns the string representation of the policy
    pub fn as_str(&self) -> &'static str {
        match self {
            MergePolicy::Merge => "Merge",
            MergePolicy::Clobber => "Clobber",
        }
    }
}

impl std::fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a policy name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown merge policy '{0}' (expected 'Merge' or 'Clobber')")]
pub struct ParsePolicyError(pub String);

impl FromStr for MergePolicy {
    type Err = ParsePolicyError;

    /// Policy names are matched case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "merge" => Ok(MergePolicy::Merge),
            "clobber" => Ok(MergePolicy::Clobber),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}
