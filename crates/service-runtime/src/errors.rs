//! # Service Errors
//!
//! Anything that can abort startup. Steady-state I/O does not produce these.

use kc_01_identity_registry::RegistryError;
use kc_02_shared_buffer::BufferError;
use kc_03_tick_counter::TickError;
use kc_04_debugfs::VfsError;
use thiserror::Error;

use crate::container::ConfigError;

/// Startup and lifecycle errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration rejected before anything was built.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Filesystem entry could not be created.
    #[error("Filesystem error: {0}")]
    Vfs(#[from] VfsError),

    /// Shared buffer could not be allocated.
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// Tick counter could not be started.
    #[error("Tick counter error: {0}")]
    Ticks(#[from] TickError),

    /// Identity sequence failed.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// `start` called on a running service.
    #[error("Service already running")]
    AlreadyRunning,
}
