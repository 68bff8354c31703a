//! Application services layer - Player, team and game use cases.
//!
//! Services orchestrate domain logic over repository abstractions (traits)
//! for dependency inversion. They hold no state between calls.

pub mod container;
mod game_service;
mod player_service;
mod team_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use game_service::{GameManager, GameService};
pub use player_service::{PlayerManager, PlayerService};
pub use team_service::{TeamManager, TeamService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use game_service::MockGameService;
#[cfg(any(test, feature = "test-utils"))]
pub use player_service::MockPlayerService;
#[cfg(any(test, feature = "test-utils"))]
pub use team_service::MockTeamService;
