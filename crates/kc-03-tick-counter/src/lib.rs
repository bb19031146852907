//! # KC-03 Tick Counter
//!
//! Read-only readout of a monotonic tick count.
//!
//! **Subsystem ID:** 3  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! Each read formats the current count as a decimal string followed by a
//! newline and serves it with file-cursor semantics. The readout has no
//! state of its own beyond the clock it samples.
//!
//! ## Module Structure
//!
//! ```text
//! kc-03-tick-counter/
//! ├── domain/          # TickConfig, TickError, readout formatting
//! ├── ports/           # TickSource (outbound)
//! ├── adapters/        # MonotonicTickSource, ManualTickSource
//! └── service.rs       # TickCounter
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{ManualTickSource, MonotonicTickSource};
pub use domain::{format_ticks, TickConfig, TickError, DEFAULT_TICK_HZ, MAX_READOUT_LEN};
pub use ports::TickSource;
pub use service::TickCounter;
