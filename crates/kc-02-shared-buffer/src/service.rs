//! # Shared Buffer Service
//!
//! `SharedBuffer` puts a `BufferState` behind a `parking_lot::RwLock`.
//! Lock acquisition cannot fail and is the only place a caller can block.

use parking_lot::RwLock;
use shared_types::SubsystemId;
use tracing::{debug, info};

use crate::domain::{BufferConfig, BufferError, BufferState};
use crate::ports::SharedBufferApi;

const TAG: &str = SubsystemId::SharedBuffer.tag();

/// Fixed-capacity byte buffer with concurrent readers and exclusive writers.
#[derive(Debug)]
pub struct SharedBuffer {
    state: RwLock<BufferState>,
    capacity: usize,
}

impl SharedBuffer {
    /// Allocate zero-filled storage. The valid length starts at 0.
    pub fn allocate(config: &BufferConfig) -> Result<Self, BufferError> {
        let state = BufferState::allocate(config)?;
        info!("[{}] Allocated {} byte buffer", TAG, state.capacity());

        Ok(Self {
            capacity: state.capacity(),
            state: RwLock::new(state),
        })
    }

    /// Consistent copy of the logical content, taken under one read lock.
    pub fn snapshot(&self) -> Vec<u8> {
        self.state.read().content().to_vec()
    }
}

impl SharedBufferApi for SharedBuffer {
    fn read_into(&self, pos: &mut u64, dst: &mut [u8]) -> usize {
        self.state.read().read_into(pos, dst)
    }

    fn read(&self, pos: &mut u64, max_len: usize) -> Vec<u8> {
        let state = self.state.read();
        let mut out = vec![0u8; max_len.min(state.valid_len())];
        let count = state.read_into(pos, &mut out);
        drop(state);

        out.truncate(count);
        out
    }

    fn write(&self, pos: &mut u64, data: &[u8]) -> usize {
        let data = if data.len() > self.capacity {
            debug!(
                "[{}] Truncating {} byte write to capacity {}",
                TAG,
                data.len(),
                self.capacity
            );
            &data[..self.capacity]
        } else {
            data
        };

        let mut state = self.state.write();
        let written = state.write(pos, data);
        debug!(
            "[{}] Wrote {} bytes, valid length now {}",
            TAG,
            written,
            state.valid_len()
        );
        written
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn valid_len(&self) -> usize {
        self.state.read().valid_len()
    }
}

impl Drop for SharedBuffer {
    fn drop(&mut self) {
        debug!("[{}] Released {} byte buffer", TAG, self.capacity);
    }
}
