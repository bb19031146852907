//! # Identity Sequence
//!
//! The fixed sequence run against the registry during startup. It leaves
//! the registry empty when it succeeds.

use kc_01_identity_registry::{IdentityRegistry, IdentityRegistryApi, RegistryError};
use tracing::{debug, error, info};

/// Run the startup identity sequence.
///
/// Any failure aborts the sequence; the caller is expected to tear the
/// registry down.
pub fn run_identity_demo(registry: &mut IdentityRegistry) -> Result<(), RegistryError> {
    for (name, id) in [("Konstantine", 1), ("Anonymous Goose", 2)] {
        if let Err(e) = registry.create(name, id) {
            error!("[runtime] Could not create identity {}", name);
            return Err(e);
        }
        info!("[runtime] Identity {} created", name);
    }

    let first = registry
        .find(1)
        .ok_or(RegistryError::NotFound { id: 1 })?;
    let hired = first.name().to_owned();
    info!("[runtime] id 1 = {}", hired);

    registry.hire(1)?;
    info!("[runtime] {} is hired", hired);

    if registry.find(10).is_none() {
        debug!("[runtime] id 10 not found");
    }

    registry.destroy(2);
    registry.destroy(1);
    Ok(())
}
