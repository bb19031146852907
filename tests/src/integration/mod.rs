//! # Integration Scenarios
//!
//! Tests that span more than one subsystem, or the whole service.

pub mod concurrency;
pub mod lifecycle;
pub mod registry;
