//! Game repository contract.

use async_trait::async_trait;

use common::AppResult;
use domain::{Game, Id, NewGame};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Game repository trait for dependency injection.
///
/// Team references are stored as given; existence checks are the
/// caller's responsibility.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Store a new game and return the assigned id
    async fn create(&self, new_game: &NewGame) -> AppResult<Id>;

    async fn find_by_id(&self, id: Id) -> AppResult<Option<Game>>;

    /// Seat `blacks` only if the game still has no black team.
    ///
    /// The check and the write must be atomic in storage. Returns the
    /// joined game, `Ok(None)` when a black team is already seated, or
    /// `NotFound` if the game does not exist.
    async fn join(&self, id: Id, blacks: Id) -> AppResult<Option<Game>>;
}
