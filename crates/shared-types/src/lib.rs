//! # Shared Types Crate
//!
//! Types shared across the Kernel-Care subsystems.
//!
//! ## Contents
//!
//! - **Subsystem identity**: `SubsystemId` and its log tags (`[kc-01]`, ...)
//! - **Cursor I/O**: `read_from_buffer` / `write_to_buffer`, the offset
//!   semantics every file-backed object uses when it serves bytes
//! - **Sizes**: `PAGE_SIZE`, the one-block upper bound for buffers

pub mod io;
pub mod subsystem;

pub use io::{read_from_buffer, write_to_buffer};
pub use subsystem::SubsystemId;

/// Size of one page-equivalent block. No buffer in the service is larger.
pub const PAGE_SIZE: usize = 4096;
