//! # Registry Configuration

use serde::{Deserialize, Serialize};

/// Default allocation budget, in records.
pub const DEFAULT_MAX_IDENTITIES: usize = 1024;

/// Identity registry configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Allocation budget. A `create` past this many live records fails with
    /// `OutOfMemory`, exactly like an exhausted allocator would.
    pub max_identities: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_identities: DEFAULT_MAX_IDENTITIES,
        }
    }
}

impl RegistryConfig {
    /// Create config for testing.
    pub fn for_testing() -> Self {
        Self { max_identities: 16 }
    }

    /// Config with an explicit budget.
    pub fn with_max_identities(max_identities: usize) -> Self {
        Self { max_identities }
    }
}
