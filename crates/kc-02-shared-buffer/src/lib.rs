//! # KC-02 Shared Buffer
//!
//! Fixed-capacity byte buffer shared by concurrent readers and writers.
//!
//! **Subsystem ID:** 2  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! One block of storage (at most `PAGE_SIZE` bytes) plus a valid length:
//! - `read` serves bytes up to the valid length, never up to capacity
//! - `write` clamps oversized payloads to capacity and then sets the valid
//!   length to where the write ended, so a shorter rewrite at offset 0
//!   shrinks the logical content
//!
//! Truncation is not an error. `write` reports how many bytes it accepted.
//!
//! ## Concurrency
//!
//! | Operation | Lock | Concurrent with |
//! |-----------|------|-----------------|
//! | `read` / `read_into` / `snapshot` | shared | other readers |
//! | `write` | exclusive | nothing |
//!
//! Guards are released on every exit path, including unwinding.
//!
//! ## Invariants
//!
//! - **valid_len <= capacity** at every lock release
//! - Readers never observe a partially applied write

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{BufferConfig, BufferError, BufferState};
pub use ports::SharedBufferApi;
pub use service::SharedBuffer;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
