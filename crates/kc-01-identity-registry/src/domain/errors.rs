//! # Domain Errors
//!
//! Error types for the Identity Registry subsystem.

use thiserror::Error;

use super::entities::IdentityId;

/// Identity registry error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No memory left for a new record. The registry is unchanged.
    #[error("Out of memory: failed to create identity {id}")]
    OutOfMemory {
        /// Id of the record that could not be created
        id: IdentityId,
    },

    /// No record carries the requested id.
    #[error("Identity not found: {id}")]
    NotFound {
        /// Requested id
        id: IdentityId,
    },
}
