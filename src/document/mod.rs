//! Document loading and saving
//!
//! Reads the source and target files, parses them as relaxed JSON (comments
//! and trailing commas allowed) and writes the merged result back
//! pretty-printed.

pub mod jsonc;

use serde_json::Value;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which side of the merge a document is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    Source,
    Target,
}

impl DocumentRole {
    /// Returns the string representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentRole::Source => "source",
            DocumentRole::Target => "target",
        }
    }
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Document errors
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to read {role} file {}: {source}", path.display())]
    Read {
        role: DocumentRole,
        path: PathBuf,
        source: io::Error,
    },

    #[error("failed to parse {role} file {} as JSON: {source}", path.display())]
    Parse {
        role: DocumentRole,
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize merged document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write target file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Read a document's text
pub fn load(role: DocumentRole, path: &Path) -> Result<String, DocumentError> {
    fs::read_to_string(path).map_err(|source| DocumentError::Read {
        role,
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a document's text as relaxed JSON
pub fn parse(role: DocumentRole, path: &Path, text: &str) -> Result<Value, DocumentError> {
    serde_json::from_str(&jsonc::strip(text)).map_err(|source| DocumentError::Parse {
        role,
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a merged document: two-space indentation, non-ASCII unescaped,
/// no trailing newline
pub fn to_pretty_text(value: &Value) -> Result<String, DocumentError> {
    serde_json::to_string_pretty(value).map_err(DocumentError::Serialize)
}

/// Write atomically to file (write-then-rename)
///
/// Symlinks are followed so the file they point at is replaced, and an
/// existing file's permissions carry over to the replacement.
pub fn write_atomic(path: &Path, text: &str) -> Result<(), DocumentError> {
    let write_err = |source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    };

    let resolved = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(write_err(e)),
    };
    let permissions = fs::metadata(&resolved).ok().map(|m| m.permissions());

    // Write to temp file first
    let temp_path = temp_path_for(&resolved);
    fs::write(&temp_path, text).map_err(write_err)?;

    // Atomic rename
    let replaced = match permissions {
        Some(permissions) => fs::set_permissions(&temp_path, permissions),
        None => Ok(()),
    }
    .and_then(|()| fs::rename(&temp_path, &resolved));

    if let Err(e) = replaced {
        let _ = fs::remove_file(&temp_path);
        return Err(write_err(e));
    }

    debug!(path = %resolved.display(), bytes = text.len(), "wrote target file");
    Ok(())
}

/// Sibling temp path, so the rename stays on one filesystem
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
