//! Domain layer - Core chess match-making records and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Players, teams and games all share the single [`Id`] identifier type.

pub mod error;
pub mod game;
pub mod id;
pub mod player;
pub mod team;

pub use error::{DomainError, DomainResult};
pub use game::{Game, GameState, NewGame};
pub use id::Id;
pub use player::{NewPlayer, Player};
pub use team::{NewTeam, Team};
