//! # Subsystem Identifiers
//!
//! Every subsystem logs with its tag so the lines of one service run can be
//! told apart without structured fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subsystem identifier following the KC naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubsystemId {
    /// KC-01: Identity Registry
    IdentityRegistry = 1,
    /// KC-02: Shared Buffer
    SharedBuffer = 2,
    /// KC-03: Tick Counter
    TickCounter = 3,
    /// KC-04: Debug filesystem
    Debugfs = 4,
}

impl SubsystemId {
    /// All subsystems in startup order.
    pub const ALL: [SubsystemId; 4] = [
        Self::Debugfs,
        Self::TickCounter,
        Self::SharedBuffer,
        Self::IdentityRegistry,
    ];

    /// Get the crate name of the subsystem.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::IdentityRegistry => "kc-01-identity-registry",
            Self::SharedBuffer => "kc-02-shared-buffer",
            Self::TickCounter => "kc-03-tick-counter",
            Self::Debugfs => "kc-04-debugfs",
        }
    }

    /// Short tag used as a log prefix.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::IdentityRegistry => "kc-01",
            Self::SharedBuffer => "kc-02",
            Self::TickCounter => "kc-03",
            Self::Debugfs => "kc-04",
        }
    }
}

impl fmt::Display for SubsystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
