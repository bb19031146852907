//! # KC-01 Identity Registry
//!
//! Ordered in-memory registry of named identities.
//!
//! **Subsystem ID:** 1  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Holds `Identity` records (bounded name, integer id, hired flag) for the
//! lifetime of the service:
//! - `create` inserts at the head, so the newest record is seen first
//! - `find` / `hire` act on the first record with a matching id
//! - `destroy` removes every record with a matching id
//! - `destroy_all` empties the registry at teardown
//!
//! Ids are not unique. Duplicates coexist, which is what makes the
//! first-match / all-matches split above observable.
//!
//! ## Concurrency
//!
//! `IdentityRegistry` has no lock. Every mutating method takes `&mut self`,
//! so it can only be shared between threads through
//! `SharedIdentityRegistry`, which puts one mutex around the whole
//! collection.
//!
//! ## Module Structure
//!
//! ```text
//! kc-01-identity-registry/
//! ├── domain/          # Identity, IdentityName, RegistryConfig, RegistryError
//! ├── ports/           # IdentityRegistryApi (inbound)
//! └── service.rs       # IdentityRegistry, SharedIdentityRegistry
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{
    Identity, IdentityId, IdentityName, RegistryConfig, RegistryError, DEFAULT_MAX_IDENTITIES,
    MAX_NAME_LEN,
};
pub use ports::IdentityRegistryApi;
pub use service::{IdentityRegistry, SharedIdentityRegistry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
