//! # Tick Counter Service

use shared_types::{read_from_buffer, SubsystemId};
use tracing::trace;

use crate::adapters::MonotonicTickSource;
use crate::domain::{format_ticks, TickConfig, TickError};
use crate::ports::TickSource;

const TAG: &str = SubsystemId::TickCounter.tag();

/// Read-only tick readout over a `TickSource`.
#[derive(Debug)]
pub struct TickCounter<S: TickSource = MonotonicTickSource> {
    source: S,
}

impl TickCounter<MonotonicTickSource> {
    /// Counter over the monotonic clock, starting at zero now.
    pub fn monotonic(config: &TickConfig) -> Result<Self, TickError> {
        Ok(Self::new(MonotonicTickSource::new(config)?))
    }
}

impl<S: TickSource> TickCounter<S> {
    /// Counter over an arbitrary source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Current tick count.
    pub fn ticks(&self) -> u64 {
        self.source.now_ticks()
    }

    /// Current readout text.
    pub fn readout(&self) -> String {
        format_ticks(self.ticks())
    }

    /// Serve the readout with cursor semantics.
    ///
    /// The text is formatted fresh on every call, so a reader that resumes
    /// at a non-zero cursor continues in a newer readout.
    pub fn read_into(&self, pos: &mut u64, dst: &mut [u8]) -> usize {
        let text = self.readout();
        trace!("[{}] Serving readout {:?} at offset {}", TAG, text.trim_end(), pos);
        read_from_buffer(dst, pos, text.as_bytes())
    }

    /// Underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
