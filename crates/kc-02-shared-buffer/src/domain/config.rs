//! # Buffer Configuration

use serde::{Deserialize, Serialize};
use shared_types::PAGE_SIZE;

use super::errors::BufferError;

/// Shared buffer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferConfig {
    /// Storage size in bytes. At most `PAGE_SIZE`.
    pub capacity: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: PAGE_SIZE,
        }
    }
}

impl BufferConfig {
    /// Create config for testing.
    pub fn for_testing() -> Self {
        Self { capacity: 256 }
    }

    /// Config with an explicit capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Reject capacities outside `1..=PAGE_SIZE`.
    pub fn validate(&self) -> Result<(), BufferError> {
        if self.capacity == 0 || self.capacity > PAGE_SIZE {
            return Err(BufferError::InvalidCapacity {
                capacity: self.capacity,
                max: PAGE_SIZE,
            });
        }
        Ok(())
    }
}
