//! Manually driven tick source for tests.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::ports::TickSource;

/// Tick source that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualTickSource {
    ticks: AtomicU64,
}

impl ManualTickSource {
    /// Start at `ticks`.
    pub fn new(ticks: u64) -> Self {
        Self {
            ticks: AtomicU64::new(ticks),
        }
    }

    /// Move forward by `delta` ticks.
    pub fn advance(&self, delta: u64) {
        self.ticks.fetch_add(delta, Ordering::SeqCst);
    }
}

impl TickSource for ManualTickSource {
    fn now_ticks(&self) -> u64 {
        self.ticks.load(Ordering::SeqCst)
    }
}
