//! # Identity Registry Service
//!
//! `IdentityRegistry` implements the inbound port over a `VecDeque`.
//!
//! ## Ordering
//!
//! New records go to the front. Iteration, `find` and `hire` therefore see
//! the most recently created record first; that reverse-chronological order
//! is the registry's contract, not an artifact of the container.
//!
//! ## Removal
//!
//! `destroy` uses `retain`, which visits every element once and keeps the
//! survivors in their relative order, so removing several matches in one
//! pass cannot skip or revisit a record. A removed record is out of the
//! collection before it is dropped; no reference to it can outlive the
//! `&mut self` borrow of the call.

use std::collections::VecDeque;

use parking_lot::{Mutex, MutexGuard};
use shared_types::SubsystemId;
use tracing::{debug, error, info};

use crate::domain::{Identity, IdentityId, IdentityName, RegistryConfig, RegistryError};
use crate::ports::IdentityRegistryApi;

const TAG: &str = SubsystemId::IdentityRegistry.tag();

/// In-memory identity registry.
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    /// Records, newest first.
    records: VecDeque<Identity>,
    /// Registry configuration.
    config: RegistryConfig,
}

impl IdentityRegistry {
    /// Create an empty registry with the default budget.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with a custom configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            records: VecDeque::new(),
            config,
        }
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether any record carries `id`.
    pub fn contains(&self, id: IdentityId) -> bool {
        self.records.iter().any(|identity| identity.id() == id)
    }

    /// Records in registry order, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Identity> {
        self.records.iter()
    }

    /// Active configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl IdentityRegistryApi for IdentityRegistry {
    fn create(&mut self, name: &str, id: IdentityId) -> Result<(), RegistryError> {
        if self.records.len() >= self.config.max_identities {
            error!(
                "[{}] Failed to create identity {}: budget of {} records exhausted",
                TAG, id, self.config.max_identities
            );
            return Err(RegistryError::OutOfMemory { id });
        }

        // Reserve before building the record so a failure leaves nothing behind.
        if self.records.try_reserve(1).is_err() {
            error!("[{}] Failed to create identity {}: allocation failed", TAG, id);
            return Err(RegistryError::OutOfMemory { id });
        }

        if IdentityName::was_truncated(name) {
            debug!("[{}] Identity name {:?} truncated", TAG, name);
        }

        self.records.push_front(Identity::new(name, id));
        debug!("[{}] Created identity {} ({} records)", TAG, id, self.records.len());
        Ok(())
    }

    fn find(&self, id: IdentityId) -> Option<&Identity> {
        self.records.iter().find(|identity| identity.id() == id)
    }

    fn hire(&mut self, id: IdentityId) -> Result<(), RegistryError> {
        let identity = self
            .records
            .iter_mut()
            .find(|identity| identity.id() == id)
            .ok_or(RegistryError::NotFound { id })?;

        identity.mark_hired();
        debug!("[{}] Hired identity {} ({})", TAG, id, identity.name());
        Ok(())
    }

    fn destroy(&mut self, id: IdentityId) -> usize {
        let before = self.records.len();
        self.records.retain(|identity| identity.id() != id);
        let removed = before - self.records.len();

        info!("[{}] Freeing memory of identity {} is done", TAG, id);
        removed
    }

    fn destroy_all(&mut self) -> usize {
        let removed = self.records.drain(..).count();
        debug!("[{}] Destroyed all identities ({} records)", TAG, removed);
        removed
    }
}

/// `IdentityRegistry` behind a single mutex.
///
/// Use this whenever registry calls can come from more than one thread.
/// Each method holds the lock for the whole operation; `lock` hands out the
/// guard for multi-step sequences that must not interleave.
#[derive(Debug, Default)]
pub struct SharedIdentityRegistry {
    inner: Mutex<IdentityRegistry>,
}

impl SharedIdentityRegistry {
    /// Wrap an existing registry.
    pub fn new(registry: IdentityRegistry) -> Self {
        Self {
            inner: Mutex::new(registry),
        }
    }

    /// Exclusive access for a sequence of operations.
    pub fn lock(&self) -> MutexGuard<'_, IdentityRegistry> {
        self.inner.lock()
    }

    /// See [`IdentityRegistryApi::create`].
    pub fn create(&self, name: &str, id: IdentityId) -> Result<(), RegistryError> {
        self.inner.lock().create(name, id)
    }

    /// Owned copy of the first record with `id`.
    ///
    /// A borrowed view cannot escape the lock, so this clones.
    pub fn find(&self, id: IdentityId) -> Option<Identity> {
        self.inner.lock().find(id).cloned()
    }

    /// See [`IdentityRegistryApi::hire`].
    pub fn hire(&self, id: IdentityId) -> Result<(), RegistryError> {
        self.inner.lock().hire(id)
    }

    /// See [`IdentityRegistryApi::destroy`].
    pub fn destroy(&self, id: IdentityId) -> usize {
        self.inner.lock().destroy(id)
    }

    /// See [`IdentityRegistryApi::destroy_all`].
    pub fn destroy_all(&self) -> usize {
        self.inner.lock().destroy_all()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Unwrap the registry.
    pub fn into_inner(self) -> IdentityRegistry {
        self.inner.into_inner()
    }
}
