//! # Domain Module
//!
//! Buffer state and configuration for the Shared Buffer subsystem.

pub mod config;
pub mod errors;
pub mod state;

pub use config::*;
pub use errors::*;
pub use state::*;
