//! Player repository contract.

use async_trait::async_trait;

use common::AppResult;
use domain::{Id, NewPlayer, Player};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Player repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Store a new player and return the assigned id
    async fn create(&self, new_player: &NewPlayer) -> AppResult<Id>;

    async fn find_by_id(&self, id: Id) -> AppResult<Option<Player>>;

    /// Players taking part in a game, in storage order
    async fn list_by_game(&self, game_id: Id) -> AppResult<Vec<Player>>;
}
