//! # Domain Entities
//!
//! `Identity` and its bounded name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity key. Not unique within a registry.
pub type IdentityId = i32;

/// Usable bytes in an identity name: a 20-byte field minus its terminator.
pub const MAX_NAME_LEN: usize = 19;

/// Bounded identity name.
///
/// Longer inputs are cut to at most `MAX_NAME_LEN` bytes, backing off to the
/// previous character boundary so the result is always valid UTF-8.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct IdentityName(String);

impl From<String> for IdentityName {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl IdentityName {
    /// Copy `name`, truncating at the bound.
    pub fn new(name: &str) -> Self {
        let mut end = name.len().min(MAX_NAME_LEN);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        Self(name[..end].to_owned())
    }

    /// The stored name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the input had to be cut to fit.
    pub fn was_truncated(original: &str) -> bool {
        original.len() > MAX_NAME_LEN
    }
}

impl fmt::Display for IdentityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IdentityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A named, identified record with a hired flag.
///
/// Only the registry can change `hired`; name and id are fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    name: IdentityName,
    id: IdentityId,
    hired: bool,
}

impl Identity {
    /// Create a new, not yet hired identity.
    pub fn new(name: &str, id: IdentityId) -> Self {
        Self {
            name: IdentityName::new(name),
            id,
            hired: false,
        }
    }

    /// Bounded name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Identity key.
    pub fn id(&self) -> IdentityId {
        self.id
    }

    /// Whether `hire` has been applied to this record.
    pub fn is_hired(&self) -> bool {
        self.hired
    }

    pub(crate) fn mark_hired(&mut self) {
        self.hired = true;
    }
}
