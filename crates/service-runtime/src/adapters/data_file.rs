//! `data` file: read/write access to the shared buffer.

use std::sync::Arc;

use kc_02_shared_buffer::{SharedBuffer, SharedBufferApi};
use kc_04_debugfs::{FileOperations, VfsError};

/// Operation table over the shared buffer.
#[derive(Debug, Clone)]
pub struct DataFile {
    buffer: Arc<SharedBuffer>,
}

impl DataFile {
    /// Wrap a buffer.
    pub fn new(buffer: Arc<SharedBuffer>) -> Self {
        Self { buffer }
    }
}

impl FileOperations for DataFile {
    fn read(&self, pos: &mut u64, dst: &mut [u8]) -> Result<usize, VfsError> {
        Ok(self.buffer.read_into(pos, dst))
    }

    fn write(&self, pos: &mut u64, data: &[u8]) -> Result<usize, VfsError> {
        Ok(self.buffer.write(pos, data))
    }
}
