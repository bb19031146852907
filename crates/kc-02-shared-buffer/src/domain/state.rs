//! # Buffer State
//!
//! Storage plus valid length, with the copy rules applied to them. No
//! locking here; `SharedBuffer` owns the lock.

use shared_types::{read_from_buffer, write_to_buffer};

use super::config::BufferConfig;
use super::errors::BufferError;

/// Storage and logical extent of a shared buffer.
#[derive(Debug)]
pub struct BufferState {
    storage: Box<[u8]>,
    valid_len: usize,
}

impl BufferState {
    /// Allocate zero-filled storage for `config.capacity` bytes.
    pub fn allocate(config: &BufferConfig) -> Result<Self, BufferError> {
        config.validate()?;

        let mut storage = Vec::new();
        storage
            .try_reserve_exact(config.capacity)
            .map_err(|_| BufferError::OutOfMemory {
                capacity: config.capacity,
            })?;
        storage.resize(config.capacity, 0);

        Ok(Self {
            storage: storage.into_boxed_slice(),
            valid_len: 0,
        })
    }

    /// Storage size in bytes.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Logical extent of the content.
    pub fn valid_len(&self) -> usize {
        self.valid_len
    }

    /// The logical content, `storage[..valid_len]`.
    pub fn content(&self) -> &[u8] {
        &self.storage[..self.valid_len]
    }

    /// Copy logical content from `*pos` into `dst`, advancing `pos`.
    pub fn read_into(&self, pos: &mut u64, dst: &mut [u8]) -> usize {
        read_from_buffer(dst, pos, self.content())
    }

    /// Copy `data` into storage at `*pos`, advancing `pos`, then move the
    /// valid length to where the write ended.
    ///
    /// `data` must already be clamped to capacity. Bytes that would land past
    /// the end of storage are dropped.
    pub fn write(&mut self, pos: &mut u64, data: &[u8]) -> usize {
        let written = write_to_buffer(&mut self.storage, pos, data);
        let capacity = self.capacity();
        self.valid_len = usize::try_from(*pos).map_or(capacity, |end| end.min(capacity));
        written
    }
}
