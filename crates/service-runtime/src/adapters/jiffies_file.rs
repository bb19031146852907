//! `jiffies` file: read-only tick readout.

use std::sync::Arc;

use kc_03_tick_counter::{TickCounter, TickSource};
use kc_04_debugfs::{FileOperations, VfsError};

/// Operation table over the tick counter. No write operation.
#[derive(Debug)]
pub struct JiffiesFile<S: TickSource> {
    counter: Arc<TickCounter<S>>,
}

impl<S: TickSource> JiffiesFile<S> {
    /// Wrap a counter.
    pub fn new(counter: Arc<TickCounter<S>>) -> Self {
        Self { counter }
    }
}

impl<S: TickSource> FileOperations for JiffiesFile<S> {
    fn read(&self, pos: &mut u64, dst: &mut [u8]) -> Result<usize, VfsError> {
        Ok(self.counter.read_into(pos, dst))
    }
}
