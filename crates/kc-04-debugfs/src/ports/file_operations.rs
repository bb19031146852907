//! # File Operations
//!
//! The operation table a file is created with. Objects exposed through the
//! tree implement this; the tree calls it with the handle's cursor.

use crate::domain::VfsError;

/// File operation table - outbound port of the tree.
///
/// Both operations default to `NotSupported`, so a read-only object only
/// implements `read`.
pub trait FileOperations: Send + Sync {
    /// Copy up to `dst.len()` bytes from `*pos`, advancing `pos`.
    fn read(&self, pos: &mut u64, dst: &mut [u8]) -> Result<usize, VfsError> {
        let _ = (pos, dst);
        Err(VfsError::NotSupported(String::from("read")))
    }

    /// Accept bytes at `*pos`, advancing `pos` by the count accepted.
    fn write(&self, pos: &mut u64, data: &[u8]) -> Result<usize, VfsError> {
        let _ = (pos, data);
        Err(VfsError::NotSupported(String::from("write")))
    }
}
