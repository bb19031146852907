//! # Adapters Layer
//!
//! Implements the `TickSource` port.

mod manual;
mod monotonic;

pub use manual::ManualTickSource;
pub use monotonic::MonotonicTickSource;
