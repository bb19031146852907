//! Monotonic clock adapter.

use std::time::Instant;

use crate::domain::{TickConfig, TickError};
use crate::ports::TickSource;

/// Ticks elapsed since construction at a fixed frequency, from
/// `std::time::Instant`.
#[derive(Debug, Clone)]
pub struct MonotonicTickSource {
    start: Instant,
    hz: u32,
}

impl MonotonicTickSource {
    /// Start counting now.
    pub fn new(config: &TickConfig) -> Result<Self, TickError> {
        config.validate()?;
        Ok(Self {
            start: Instant::now(),
            hz: config.hz,
        })
    }

    /// Ticks per second.
    pub fn hz(&self) -> u32 {
        self.hz
    }
}

impl TickSource for MonotonicTickSource {
    fn now_ticks(&self) -> u64 {
        let nanos = self.start.elapsed().as_nanos();
        let ticks = nanos * u128::from(self.hz) / 1_000_000_000;
        u64::try_from(ticks).unwrap_or(u64::MAX)
    }
}
