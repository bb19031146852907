//! # Paths
//!
//! Paths are relative to the mount root, `/`-separated. A leading slash
//! and repeated slashes are accepted and dropped; `.` and `..` are not
//! allowed since the tree has no notion of a working directory.

use super::errors::VfsError;

/// Check a single entry name.
pub fn validate_name(name: &str) -> Result<(), VfsError> {
    if name.is_empty() {
        return Err(VfsError::InvalidPath(String::from("Empty name")));
    }
    if name == "." || name == ".." {
        return Err(VfsError::InvalidPath(format!("Reserved name: {}", name)));
    }
    if name.contains('/') || name.contains('\0') {
        return Err(VfsError::InvalidPath(format!(
            "Name contains separator or null: {:?}",
            name
        )));
    }
    Ok(())
}

/// Split a path into validated components. The root is the empty list.
pub fn components(path: &str) -> Result<Vec<&str>, VfsError> {
    path.split('/')
        .filter(|component| !component.is_empty())
        .map(|component| validate_name(component).map(|_| component))
        .collect()
}

/// Canonical form of a path: components joined by single slashes, no
/// leading slash. The root normalizes to the empty string.
pub fn normalize_path(path: &str) -> Result<String, VfsError> {
    Ok(components(path)?.join("/"))
}

/// Join a parent path and an entry name.
pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{}/{}", parent, name)
    }
}
