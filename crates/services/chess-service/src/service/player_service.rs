//! Player service - Handles player-related business logic.
//!
//! SOLID (SRP): Handles player-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{Id, NewPlayer, Player};

use crate::repository::PlayerRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Player service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PlayerService: Send + Sync {
    /// Register a new player
    async fn add_player(&self, new_player: NewPlayer) -> AppResult<Player>;

    /// Get player by ID
    async fn get_player(&self, id: Id) -> AppResult<Player>;

    /// List players of a game (empty when the game has none)
    async fn get_players_by_game(&self, game_id: Id) -> AppResult<Vec<Player>>;

    /// Not supported; always fails with `AppError::Unimplemented`
    async fn update_player(&self, player: Player) -> AppResult<Player>;
}

/// Concrete implementation of PlayerService using repository.
pub struct PlayerManager {
    repo: Arc<dyn PlayerRepository>,
}

impl PlayerManager {
    /// Create new player service instance with repository
    pub fn new(repo: Arc<dyn PlayerRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl PlayerService for PlayerManager {
    async fn add_player(&self, new_player: NewPlayer) -> AppResult<Player> {
        let id = self.repo.create(&new_player).await?;
        tracing::debug!(player_id = %id, "Player created");
        Ok(new_player.into_player(id))
    }

    async fn get_player(&self, id: Id) -> AppResult<Player> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn get_players_by_game(&self, game_id: Id) -> AppResult<Vec<Player>> {
        self.repo.list_by_game(game_id).await
    }

    async fn update_player(&self, player: Player) -> AppResult<Player> {
        tracing::warn!(player_id = %player.id, "Rejected call to unsupported update_player");
        Err(AppError::Unimplemented("update_player"))
    }
}
