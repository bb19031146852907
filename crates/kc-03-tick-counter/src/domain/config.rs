//! # Tick Configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default tick frequency in Hz.
pub const DEFAULT_TICK_HZ: u32 = 250;

/// Tick counter configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickConfig {
    /// Ticks per second.
    pub hz: u32,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            hz: DEFAULT_TICK_HZ,
        }
    }
}

impl TickConfig {
    /// Reject a zero frequency.
    pub fn validate(&self) -> Result<(), TickError> {
        if self.hz == 0 {
            return Err(TickError::InvalidFrequency(self.hz));
        }
        Ok(())
    }
}

/// Tick counter error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TickError {
    /// Frequency must be non-zero.
    #[error("Invalid tick frequency: {0} Hz")]
    InvalidFrequency(u32),
}
