//! # Service Runtime Library
//!
//! Exposes the runtime's modules for tests and embedding. The `main.rs`
//! binary is a thin shell around `ServiceRuntime`.
//!
//! ## Layout
//!
//! - `container/` - configuration and the `ServiceContext` built at start
//! - `adapters/` - `FileOperations` tables over the subsystems
//! - `demo` - the identity sequence run during startup
//! - `logging` - tracing subscriber setup
//! - `runtime` - start / wait / stop orchestration

#![warn(missing_docs)]

pub mod adapters;
pub mod container;
pub mod demo;
pub mod errors;
pub mod logging;
pub mod runtime;

pub use container::{ConfigError, ServiceConfig, ServiceContext};
pub use errors::ServiceError;
pub use runtime::ServiceRuntime;
