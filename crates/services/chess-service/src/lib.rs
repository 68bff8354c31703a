//! Chess Service Library
//!
//! Business layer of the chess match-making service: players, teams and
//! games, orchestrated over repository contracts supplied by the host.
//!
//! ```ignore
//! let services = Services::from_repositories(player_repo, team_repo, game_repo);
//! let game = services.games().add_game(NewGame::new(whites)).await?;
//! ```

pub mod config;
pub mod repository;
pub mod service;

use common::{telemetry, AppResult};

pub use config::ChessServiceConfig;
pub use service::{ServiceContainer, Services};

/// Initialize logging for a host embedding the chess service.
pub fn init_telemetry(config: &ChessServiceConfig) -> AppResult<()> {
    telemetry::init_tracing(&config.service)?;
    tracing::info!(service = %config.service.service_name, "chess service starting");
    Ok(())
}
