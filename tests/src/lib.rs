//! # Kernel-Care Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Stress benchmarks per subsystem
//! │   ├── kc_01_identity_registry.rs
//! │   ├── kc_02_shared_buffer.rs
//! │   └── kc_03_tick_counter.rs
//! │
//! └── integration/      # Cross-subsystem scenarios
//!     ├── lifecycle.rs
//!     ├── registry.rs
//!     └── concurrency.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p kc-tests
//!
//! # By category
//! cargo test -p kc-tests integration::
//!
//! # Benchmarks
//! cargo bench -p kc-tests
//! ```

pub mod benchmarks;
pub mod integration;
