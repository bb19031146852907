//! # Service Configuration
//!
//! Unified configuration for the subsystems and the runtime.
//!
//! Every field has a default and can be overridden from the environment
//! (see [`ServiceConfig::from_env`]).

use kc_01_identity_registry::RegistryConfig;
use kc_02_shared_buffer::{BufferConfig, BufferError};
use kc_03_tick_counter::{TickConfig, TickError};
use kc_04_debugfs::domain::validate_name;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Debug filesystem configuration.
    pub vfs: VfsConfig,
    /// Shared buffer configuration.
    pub buffer: BufferConfig,
    /// Identity registry configuration.
    pub registry: RegistryConfig,
    /// Tick counter configuration.
    pub ticks: TickConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
    /// Run the identity sequence during startup.
    pub run_demo: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            vfs: VfsConfig::default(),
            buffer: BufferConfig::default(),
            registry: RegistryConfig::default(),
            ticks: TickConfig::default(),
            logging: LoggingConfig::default(),
            run_demo: true,
        }
    }
}

/// Debug filesystem configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VfsConfig {
    /// Name of the service directory at the filesystem root.
    pub root_dir: String,
}

impl Default for VfsConfig {
    fn default() -> Self {
        Self {
            root_dir: String::from("kernelcare"),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive (trace, debug, info, warn, error, or a full
    /// `EnvFilter` expression).
    pub level: String,
    /// Include thread ids in log lines.
    pub thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            thread_ids: true,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Buffer capacity outside `1..=PAGE_SIZE`.
    #[error(transparent)]
    Buffer(#[from] BufferError),

    /// Zero tick frequency.
    #[error(transparent)]
    Ticks(#[from] TickError),

    /// Service directory name is not a single valid entry name.
    #[error("Invalid root directory name: {0:?}")]
    InvalidRootDir(String),
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `KC_ROOT_DIR`: Service directory (default: kernelcare)
    /// - `KC_BUFFER_CAPACITY`: Buffer size in bytes (default: 4096)
    /// - `KC_MAX_IDENTITIES`: Registry allocation budget (default: 1024)
    /// - `KC_TICK_HZ`: Tick frequency (default: 250)
    /// - `KC_LOG_LEVEL` or `RUST_LOG`: Log filter (default: info)
    /// - `KC_RUN_DEMO`: Run the identity sequence at start (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply overrides from any key/value source. Unparseable values are
    /// logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("KC_ROOT_DIR") {
            self.vfs.root_dir = dir;
        }
        if let Some(value) = lookup("KC_BUFFER_CAPACITY") {
            match value.parse() {
                Ok(capacity) => self.buffer.capacity = capacity,
                Err(_) => warn!("KC_BUFFER_CAPACITY must be an integer, got {:?}", value),
            }
        }
        if let Some(value) = lookup("KC_MAX_IDENTITIES") {
            match value.parse() {
                Ok(max) => self.registry.max_identities = max,
                Err(_) => warn!("KC_MAX_IDENTITIES must be an integer, got {:?}", value),
            }
        }
        if let Some(value) = lookup("KC_TICK_HZ") {
            match value.parse() {
                Ok(hz) => self.ticks.hz = hz,
                Err(_) => warn!("KC_TICK_HZ must be an integer, got {:?}", value),
            }
        }
        if let Some(level) = lookup("KC_LOG_LEVEL").or_else(|| lookup("RUST_LOG")) {
            self.logging.level = level;
        }
        if let Some(value) = lookup("KC_RUN_DEMO") {
            self.run_demo = value.to_lowercase() != "false" && value != "0";
        }
    }

    /// Validate before anything is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.buffer.validate()?;
        self.ticks.validate()?;
        validate_name(&self.vfs.root_dir)
            .map_err(|_| ConfigError::InvalidRootDir(self.vfs.root_dir.clone()))?;
        Ok(())
    }

    /// Create config for testing: small buffer and budget, fast ticks.
    pub fn for_testing() -> Self {
        Self {
            buffer: BufferConfig::for_testing(),
            registry: RegistryConfig::for_testing(),
            ticks: TickConfig { hz: 1000 },
            ..Self::default()
        }
    }
}
