//! # Domain Module
//!
//! Paths, modes and errors for the virtual file tree.

pub mod errors;
pub mod path;
pub mod types;

pub use errors::*;
pub use path::*;
pub use types::*;
