//! # Adapters
//!
//! `FileOperations` tables that expose the subsystems through the debug
//! filesystem. Each maps a file request onto one subsystem call.

mod data_file;
mod jiffies_file;

pub use data_file::DataFile;
pub use jiffies_file::JiffiesFile;
