//! # Service Context
//!
//! Every piece of state the service owns, built by [`ServiceContext::start`]
//! and released by [`ServiceContext::stop`].
//!
//! ## Startup Sequence
//!
//! 1. Create the service directory
//! 2. Create the read-only `jiffies` file over the tick counter
//! 3. Allocate and zero the shared buffer
//! 4. Create the read-write `data` file over the buffer
//! 5. Run the identity sequence
//!
//! A failure at any step removes the directory (and with it every file
//! created so far) and drops whatever was allocated before the error is
//! returned. No partially started service is left behind.
//!
//! ## Teardown Sequence
//!
//! 1. Remove the service directory, which invalidates open handles
//! 2. Release the shared buffer
//! 3. Destroy all identities

use std::sync::Arc;

use kc_01_identity_registry::{IdentityRegistry, IdentityRegistryApi, SharedIdentityRegistry};
use kc_02_shared_buffer::{SharedBuffer, SharedBufferApi};
use kc_03_tick_counter::TickCounter;
use kc_04_debugfs::{Dentry, FileMode, VirtualFs};
use tracing::{debug, error, info, warn};

use super::config::ServiceConfig;
use crate::adapters::{DataFile, JiffiesFile};
use crate::demo::run_identity_demo;
use crate::errors::ServiceError;

/// Name of the tick readout file.
pub const JIFFIES_FILE: &str = "jiffies";
/// Name of the shared buffer file.
pub const DATA_FILE: &str = "data";

/// Live service state.
#[derive(Debug)]
pub struct ServiceContext {
    config: ServiceConfig,
    fs: Arc<VirtualFs>,
    root: Dentry,
    ticks: Arc<TickCounter>,
    buffer: Arc<SharedBuffer>,
    registry: SharedIdentityRegistry,
}

struct Started {
    ticks: Arc<TickCounter>,
    buffer: Arc<SharedBuffer>,
    registry: SharedIdentityRegistry,
}

impl ServiceContext {
    /// Register the service in `fs` and run the startup sequence.
    pub fn start(fs: Arc<VirtualFs>, config: ServiceConfig) -> Result<Self, ServiceError> {
        config.validate()?;

        let root = fs.create_dir(&config.vfs.root_dir, None).map_err(|e| {
            error!("[runtime] Failed to create debugfs directory: {}", e);
            e
        })?;

        match Self::populate(&fs, &root, &config) {
            Ok(started) => {
                info!("[runtime] Service started under {}", root);
                Ok(Self {
                    config,
                    fs,
                    root,
                    ticks: started.ticks,
                    buffer: started.buffer,
                    registry: started.registry,
                })
            }
            Err(e) => {
                if let Err(cleanup) = fs.remove(&root) {
                    warn!("[runtime] Cleanup of {} failed: {}", root, cleanup);
                }
                Err(e)
            }
        }
    }

    fn populate(
        fs: &VirtualFs,
        root: &Dentry,
        config: &ServiceConfig,
    ) -> Result<Started, ServiceError> {
        let ticks = Arc::new(TickCounter::monotonic(&config.ticks)?);
        fs.create_file(
            JIFFIES_FILE,
            FileMode::READ_ONLY,
            Some(root),
            Arc::new(JiffiesFile::new(Arc::clone(&ticks))),
        )
        .map_err(|e| {
            error!("[runtime] Failed to create jiffies file: {}", e);
            e
        })?;

        let buffer = Arc::new(SharedBuffer::allocate(&config.buffer).map_err(|e| {
            error!("[runtime] Failed to allocate memory for buffer: {}", e);
            e
        })?);

        fs.create_file(
            DATA_FILE,
            FileMode::READ_WRITE,
            Some(root),
            Arc::new(DataFile::new(Arc::clone(&buffer))),
        )
        .map_err(|e| {
            error!("[runtime] Failed to create data file: {}", e);
            e
        })?;

        let mut registry = IdentityRegistry::with_config(config.registry.clone());
        if config.run_demo {
            if let Err(e) = run_identity_demo(&mut registry) {
                registry.destroy_all();
                return Err(e.into());
            }
        }

        debug!("[runtime] Hello, Kernelcare!");
        Ok(Started {
            ticks,
            buffer,
            registry: SharedIdentityRegistry::new(registry),
        })
    }

    /// Tear the service down.
    pub fn stop(self) {
        if let Err(e) = self.fs.remove(&self.root) {
            warn!("[runtime] Failed to remove {}: {}", self.root, e);
        }

        let capacity = self.buffer.capacity();
        drop(self.buffer);
        debug!("[runtime] Released {} byte buffer", capacity);

        let destroyed = self.registry.destroy_all();
        debug!("[runtime] Destroyed {} remaining identities", destroyed);

        debug!("[runtime] Goodbye, Kernelcare!");
    }

    /// Active configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Filesystem the service is registered in.
    pub fn fs(&self) -> &Arc<VirtualFs> {
        &self.fs
    }

    /// Service directory entry.
    pub fn root(&self) -> &Dentry {
        &self.root
    }

    /// Path of a file in the service directory.
    pub fn file_path(&self, name: &str) -> String {
        format!("{}/{}", self.root.path(), name)
    }

    /// Tick counter behind the `jiffies` file.
    pub fn ticks(&self) -> &Arc<TickCounter> {
        &self.ticks
    }

    /// Shared buffer behind the `data` file.
    pub fn buffer(&self) -> &Arc<SharedBuffer> {
        &self.buffer
    }

    /// Identity registry.
    pub fn registry(&self) -> &SharedIdentityRegistry {
        &self.registry
    }
}
