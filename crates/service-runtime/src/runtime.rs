//! # Service Runtime
//!
//! Owns the filesystem handle and, while running, the [`ServiceContext`].

use std::future::Future;
use std::sync::Arc;

use kc_04_debugfs::VirtualFs;
use tracing::{info, warn};

use crate::container::{ServiceConfig, ServiceContext};
use crate::errors::ServiceError;

/// Start/stop orchestration around a [`ServiceContext`].
#[derive(Debug)]
pub struct ServiceRuntime {
    config: ServiceConfig,
    fs: Arc<VirtualFs>,
    context: Option<ServiceContext>,
}

impl ServiceRuntime {
    /// Create a stopped runtime that will register itself in `fs`.
    pub fn new(config: ServiceConfig, fs: Arc<VirtualFs>) -> Self {
        Self {
            config,
            fs,
            context: None,
        }
    }

    /// Run the startup sequence.
    pub fn start(&mut self) -> Result<(), ServiceError> {
        if self.context.is_some() {
            return Err(ServiceError::AlreadyRunning);
        }

        info!("===========================================");
        info!("  Kernel-Care Service Runtime v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");

        let context = ServiceContext::start(Arc::clone(&self.fs), self.config.clone())?;
        self.context = Some(context);
        Ok(())
    }

    /// Run the teardown sequence. Returns `false` if not running.
    pub fn stop(&mut self) -> bool {
        match self.context.take() {
            Some(context) => {
                info!("[runtime] Initiating shutdown...");
                context.stop();
                info!("[runtime] Shutdown complete");
                true
            }
            None => {
                warn!("[runtime] Stop requested but the service is not running");
                false
            }
        }
    }

    /// Start, wait for `shutdown` to resolve, then stop.
    pub async fn run<F>(&mut self, shutdown: F) -> Result<(), ServiceError>
    where
        F: Future<Output = ()>,
    {
        self.start()?;
        info!("[runtime] Service is running under {}", self.config.vfs.root_dir);
        shutdown.await;
        self.stop();
        Ok(())
    }

    /// Whether the service is started.
    pub fn is_running(&self) -> bool {
        self.context.is_some()
    }

    /// Live context, if started.
    pub fn context(&self) -> Option<&ServiceContext> {
        self.context.as_ref()
    }

    /// Filesystem the service registers in.
    pub fn fs(&self) -> &Arc<VirtualFs> {
        &self.fs
    }
}

impl Drop for ServiceRuntime {
    fn drop(&mut self) {
        if let Some(context) = self.context.take() {
            context.stop();
        }
    }
}
