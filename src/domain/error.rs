//! Domain-level errors

use std::path::PathBuf;
use thiserror::Error;

/// Domain errors represent scan failures and naming-rule violations.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("cannot scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("malformed name '{name}' (expected '<code> <label>'): {}", path.display())]
    MalformedName { path: PathBuf, name: String },

    #[error("slot already taken on disk: {}", .0.display())]
    SlotConflict(PathBuf),

    #[error("invalid numeric code: {0}")]
    InvalidCode(String),

    #[error("invalid entry name: '{0}'")]
    InvalidName(String),
}

impl DomainError {
    /// Build a scan error for `path` from an I/O failure.
    pub fn scan(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Scan {
            path: path.into(),
            source,
        }
    }
}
