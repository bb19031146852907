//! # Kernel-Care Service
//!
//! Registers the `kernelcare` directory in an in-process debug filesystem,
//! runs the startup sequence and waits for Ctrl+C.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use kc_04_debugfs::VirtualFs;
use service_runtime::logging::init_logging;
use service_runtime::{ServiceConfig, ServiceRuntime};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::from_env();
    init_logging(&config.logging).context("failed to initialize logging")?;
    config.validate().context("invalid configuration")?;

    let mut runtime = ServiceRuntime::new(config, Arc::new(VirtualFs::new()));
    runtime.start().context("failed to start service")?;

    info!("[runtime] Service is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;

    runtime.stop();
    Ok(())
}
