//! # Domain Module

pub mod config;
pub mod readout;

pub use config::*;
pub use readout::*;
