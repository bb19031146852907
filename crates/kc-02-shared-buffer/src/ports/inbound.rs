//! # Inbound Ports
//!
//! API trait for the Shared Buffer subsystem. Every method takes `&self`;
//! implementations synchronize internally.

/// Shared Buffer API - inbound port.
pub trait SharedBufferApi: Send + Sync {
    /// Copy up to `dst.len()` bytes of logical content starting at `*pos`.
    ///
    /// Advances `pos` by the count returned. Returns 0 when `dst` is empty
    /// or `*pos` is at or past the valid length.
    fn read_into(&self, pos: &mut u64, dst: &mut [u8]) -> usize;

    /// Owned variant of `read_into`.
    fn read(&self, pos: &mut u64, max_len: usize) -> Vec<u8>;

    /// Write `data` at `*pos`, truncating to capacity.
    ///
    /// Advances `pos` by the count returned and sets the valid length to
    /// `min(*pos, capacity)` afterwards, including for empty writes.
    fn write(&self, pos: &mut u64, data: &[u8]) -> usize;

    /// Storage size in bytes.
    fn capacity(&self) -> usize;

    /// Current logical extent.
    fn valid_len(&self) -> usize;
}
