//! Repository contracts for data access.
//!
//! Persistence lives outside this crate; hosts implement these traits
//! over their storage of choice.

mod game_repository;
mod player_repository;
mod team_repository;

pub use game_repository::GameRepository;
pub use player_repository::PlayerRepository;
pub use team_repository::TeamRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use game_repository::MockGameRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use player_repository::MockPlayerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use team_repository::MockTeamRepository;
