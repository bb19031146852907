//! # Service Container
//!
//! Configuration and the context object that owns every piece of service
//! state between start and stop.

pub mod config;
pub mod context;

pub use config::{ConfigError, LoggingConfig, ServiceConfig, VfsConfig};
pub use context::ServiceContext;
