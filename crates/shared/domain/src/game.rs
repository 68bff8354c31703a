//! Game domain entity and its lifecycle.
//!
//! A game is opened by the white team and later joined by the black team:
//!
//! ```text
//! Created (whites set, blacks absent) --join(blacks)--> Joined (both set)
//! ```
//!
//! No other transitions exist. Team references are lookups only; a game
//! does not own its teams.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::Id;

/// Lifecycle state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    /// White team assigned, waiting for an opponent
    Created,
    /// Both sides assigned
    Joined,
}

/// Game domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: Id,
    /// Team playing white
    pub whites: Id,
    /// Team playing black (None until a team joins)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blacks: Option<Id>,
}

impl Game {
    /// Create a game in the `Created` state
    pub fn new(id: Id, whites: Id) -> Self {
        Self {
            id,
            whites,
            blacks: None,
        }
    }

    pub fn state(&self) -> GameState {
        match self.blacks {
            Some(_) => GameState::Joined,
            None => GameState::Created,
        }
    }

    pub fn is_joined(&self) -> bool {
        self.state() == GameState::Joined
    }

    /// Seat `blacks` as the black side.
    ///
    /// Joining again with the team already seated returns the game
    /// unchanged. A game that already has a different black team is
    /// rejected with [`DomainError::AlreadyJoined`].
    pub fn join(&self, blacks: Id) -> DomainResult<Game> {
        match self.blacks {
            None => Ok(Game {
                blacks: Some(blacks),
                ..self.clone()
            }),
            Some(current) if current == blacks => Ok(self.clone()),
            Some(_) => Err(DomainError::AlreadyJoined(self.id)),
        }
    }
}

/// Game creation submission; only the white side is known at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGame {
    pub whites: Id,
}

impl NewGame {
    pub fn new(whites: Id) -> Self {
        Self { whites }
    }

    pub fn into_game(self, id: Id) -> Game {
        Game::new(id, self.whites)
    }
}
