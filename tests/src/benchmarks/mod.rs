//! # Kernel-Care Benchmarks
//!
//! Stress benchmarks per subsystem, registered from
//! `benches/subsystem_benchmarks.rs`.

pub mod kc_01_identity_registry;
pub mod kc_03_tick_counter;
