//! # Ports Layer
//!
//! Trait definitions for the Identity Registry subsystem.

pub mod inbound;

pub use inbound::IdentityRegistryApi;
