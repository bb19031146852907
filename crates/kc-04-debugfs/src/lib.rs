//! # KC-04 Debug Filesystem
//!
//! In-process virtual file tree. Objects are exposed as paths; each file
//! carries a mode and a `FileOperations` table, and reads/writes go through
//! an `OpenFile` handle that owns the cursor.
//!
//! **Subsystem ID:** 4  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Lifecycle
//!
//! ```text
//! create_dir("kernelcare")          -> Dentry
//! create_file("data", 0644, ops)    -> Dentry
//! open("kernelcare/data")           -> OpenFile { pos: 0 }
//! remove(dir)                       -> children removed, ops dropped
//! ```
//!
//! An `OpenFile` does not keep its file alive. Once the entry is removed the
//! handle reports `VfsError::Stale` and the object behind it can be freed.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{normalize_path, Dentry, FileMode, Metadata, NodeKind, VfsError};
pub use ports::FileOperations;
pub use service::{OpenFile, VirtualFs};
