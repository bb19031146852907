//! # Domain Errors

use thiserror::Error;

/// Shared buffer error types.
///
/// Only allocation can fail. Reads and writes on a live buffer do not
/// return errors; an oversized write is truncated instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Storage could not be allocated.
    #[error("Out of memory: failed to allocate {capacity} byte buffer")]
    OutOfMemory {
        /// Requested capacity
        capacity: usize,
    },

    /// Configured capacity is zero or larger than one page.
    #[error("Invalid buffer capacity: {capacity} (must be 1..={max})")]
    InvalidCapacity {
        /// Requested capacity
        capacity: usize,
        /// Largest allowed capacity
        max: usize,
    },
}
