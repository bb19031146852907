//! # Domain Errors

use thiserror::Error;

/// Virtual filesystem errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    /// No entry at the path.
    #[error("No such file or directory: {0}")]
    NotFound(String),

    /// An entry with that name already exists in the parent.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// A path component that must be a directory is a file.
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// Attempted file I/O on a directory.
    #[error("Is a directory: {0}")]
    IsADirectory(String),

    /// Malformed path or entry name.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Mode bits forbid the operation.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The file's operation table has no entry for the operation.
    #[error("Operation not supported: {0}")]
    NotSupported(String),

    /// The entry behind an open handle has been removed.
    #[error("Stale file handle: {0}")]
    Stale(String),
}

impl VfsError {
    /// Check if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, VfsError::NotFound(_))
    }

    /// Check if this is a permission error.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, VfsError::PermissionDenied(_))
    }
}
