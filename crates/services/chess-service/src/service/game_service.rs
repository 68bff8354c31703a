//! Game service - Handles game creation and joining.
//!
//! Both entry points that reference a team check it through
//! [`TeamService::get_team`] and only touch the game repository once the
//! team is known to exist. A game therefore never references a missing
//! team, not even transiently.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{Game, Id, NewGame};

use crate::repository::GameRepository;
use crate::service::TeamService;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Game service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait GameService: Send + Sync {
    /// Get game by ID
    async fn get_game(&self, id: Id) -> AppResult<Game>;

    /// Open a game for the white team
    async fn add_game(&self, new_game: NewGame) -> AppResult<Game>;

    /// Seat `update.blacks` as the black side of an existing game
    async fn update_game(&self, update: Game) -> AppResult<Game>;
}

/// Concrete implementation of GameService using repository and TeamService.
pub struct GameManager {
    repo: Arc<dyn GameRepository>,
    teams: Arc<dyn TeamService>,
}

impl GameManager {
    /// Create new game service instance
    pub fn new(repo: Arc<dyn GameRepository>, teams: Arc<dyn TeamService>) -> Self {
        Self { repo, teams }
    }

    async fn ensure_team_exists(&self, id: Id) -> AppResult<()> {
        match self.teams.get_team(id).await? {
            Some(_) => Ok(()),
            None => {
                tracing::warn!(team_id = %id, "Referenced team not found");
                Err(AppError::team_not_found(id))
            }
        }
    }

    /// Join attempt on a game that already has a black team
    fn rejoin(&self, game: &Game, blacks: Id) -> AppResult<Game> {
        let joined = game.join(blacks).inspect_err(|_| {
            tracing::warn!(game_id = %game.id, blacks = %blacks, "Game already joined");
        })?;
        tracing::debug!(game_id = %game.id, "Team already seated as black");
        Ok(joined)
    }
}

#[async_trait]
impl GameService for GameManager {
    async fn get_game(&self, id: Id) -> AppResult<Game> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn add_game(&self, new_game: NewGame) -> AppResult<Game> {
        self.ensure_team_exists(new_game.whites).await?;

        let id = self.repo.create(&new_game).await?;
        tracing::info!(game_id = %id, whites = %new_game.whites, "Game created");
        Ok(new_game.into_game(id))
    }

    async fn update_game(&self, update: Game) -> AppResult<Game> {
        let blacks = update
            .blacks
            .ok_or_else(|| AppError::validation("A black team is required to join a game"))?;

        self.ensure_team_exists(blacks).await?;

        let current = self.repo.find_by_id(update.id).await?.ok_or_not_found()?;
        if current.is_joined() {
            return self.rejoin(&current, blacks);
        }

        match self.repo.join(current.id, blacks).await? {
            Some(game) => {
                tracing::info!(game_id = %game.id, blacks = %blacks, "Game joined");
                Ok(game)
            }
            None => {
                // Another join won the race; judge against what it stored
                let stored = self.repo.find_by_id(current.id).await?.ok_or_not_found()?;
                self.rejoin(&stored, blacks)
            }
        }
    }
}
