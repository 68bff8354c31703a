//! Player domain entity and related types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Id;

/// Player domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: Id,
    pub email: String,
}

impl Player {
    pub fn new(id: Id, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

/// Player registration submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewPlayer {
    /// Player email address
    #[validate(
        email(message = "Invalid email format"),
        length(max = 254, message = "Email is too long")
    )]
    pub email: String,
}

impl NewPlayer {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Build the stored record once the repository has assigned an id.
    pub fn into_player(self, id: Id) -> Player {
        Player {
            id,
            email: self.email,
        }
    }
}
