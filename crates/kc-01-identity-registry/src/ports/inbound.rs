//! # Inbound Ports
//!
//! API trait defining what the Identity Registry can do.

use crate::domain::{Identity, IdentityId, RegistryError};

/// Identity Registry API - inbound port.
///
/// Not synchronized: mutating methods take `&mut self`. Wrap the
/// implementation in `SharedIdentityRegistry` to use it from several threads.
pub trait IdentityRegistryApi {
    /// Insert a new record at the head of the registry.
    ///
    /// The name is truncated to `MAX_NAME_LEN` bytes and `hired` starts
    /// false. Fails only when no memory is left, in which case nothing was
    /// inserted.
    fn create(&mut self, name: &str, id: IdentityId) -> Result<(), RegistryError>;

    /// First record with `id` in registry order, newest first.
    fn find(&self, id: IdentityId) -> Option<&Identity>;

    /// Set `hired` on the first record with `id`.
    fn hire(&mut self, id: IdentityId) -> Result<(), RegistryError>;

    /// Remove every record with `id`. Returns how many were removed.
    fn destroy(&mut self, id: IdentityId) -> usize;

    /// Remove every record. Returns how many were removed.
    fn destroy_all(&mut self) -> usize;
}
