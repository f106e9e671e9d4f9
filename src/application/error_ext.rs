//! Error conversion helpers for common I/O operations
//!
//! Provides extension traits for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::DomainError;

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// fs.create_empty_file(&placeholder)
    ///     .with_path_context("create placeholder", &placeholder)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;

    /// Like [`with_path_context`](Self::with_path_context), but an
    /// `AlreadyExists` failure becomes a slot conflict.
    fn or_slot_conflict(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{}: {}", action, path.display()),
            source: Box::new(e),
        })
    }

    fn or_slot_conflict(self, action: &str, path: &Path) -> ApplicationResult<T> {
        match self {
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(DomainError::SlotConflict(path.to_path_buf()).into())
            }
            other => other.with_path_context(action, path),
        }
    }
}
