//! Team domain entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Id;

/// Team domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: Id,
    pub name: String,
}

impl Team {
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Team creation submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewTeam {
    #[validate(length(min = 1, max = 64, message = "Team name must be between 1 and 64 characters"))]
    pub name: String,
}

impl NewTeam {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn into_team(self, id: Id) -> Team {
        Team {
            id,
            name: self.name,
        }
    }
}
