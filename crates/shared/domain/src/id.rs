//! Entity identifier shared by players, teams and games.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by a repository on creation.
///
/// Backed by a 32-bit integer, matching the storage key type. Only
/// equality, ordering and hashing are meaningful to the business layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(i32);

impl Id {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }
}

impl From<i32> for Id {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Id> for i32 {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
