//! # Core Types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unix-style permission bits of an entry.
///
/// Only the owner bits are enforced; the service has no other principals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileMode(u16);

impl FileMode {
    /// `r--r--r--`
    pub const READ_ONLY: FileMode = FileMode(0o444);
    /// `rw-r--r--`
    pub const READ_WRITE: FileMode = FileMode(0o644);
    /// `rwxr-xr-x`
    pub const DIRECTORY: FileMode = FileMode(0o755);

    const OWNER_READ: u16 = 0o400;
    const OWNER_WRITE: u16 = 0o200;

    /// Mode from raw bits; anything above `0o777` is masked off.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & 0o777)
    }

    /// Raw permission bits.
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Owner read bit.
    pub const fn owner_can_read(&self) -> bool {
        self.0 & Self::OWNER_READ != 0
    }

    /// Owner write bit.
    pub const fn owner_can_write(&self) -> bool {
        self.0 & Self::OWNER_WRITE != 0
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

/// Kind of tree entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Directory
    Directory,
    /// File with an operation table
    File,
}

/// Entry metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Normalized path
    pub path: String,
    /// Directory or file
    pub kind: NodeKind,
    /// Permission bits
    pub mode: FileMode,
}

/// Handle to a created entry, returned by `create_dir` / `create_file`.
///
/// Holds the normalized path only; the tree stays the owner of the entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dentry {
    path: String,
}

impl Dentry {
    pub(crate) fn new(path: String) -> Self {
        Self { path }
    }

    /// Normalized path of the entry.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Last path component.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

impl fmt::Display for Dentry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
