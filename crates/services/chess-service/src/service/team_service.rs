//! Team service - Handles team-related business logic.
//!
//! SOLID (SRP): Handles team-related use cases only.
//!
//! `get_team` reports absence as `Ok(None)` rather than an error; game
//! creation and joining branch on it.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{Id, NewTeam, Team};

use crate::repository::TeamRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Team service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TeamService: Send + Sync {
    /// Create a new team
    async fn add_team(&self, new_team: NewTeam) -> AppResult<Team>;

    /// Look up a team; `Ok(None)` when it does not exist
    async fn get_team(&self, id: Id) -> AppResult<Option<Team>>;

    /// Update team details
    async fn update_team(&self, team: Team) -> AppResult<Team>;
}

/// Concrete implementation of TeamService using repository.
pub struct TeamManager {
    repo: Arc<dyn TeamRepository>,
}

impl TeamManager {
    /// Create new team service instance with repository
    pub fn new(repo: Arc<dyn TeamRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl TeamService for TeamManager {
    async fn add_team(&self, new_team: NewTeam) -> AppResult<Team> {
        let id = self.repo.create(&new_team).await?;
        tracing::debug!(team_id = %id, "Team created");
        Ok(new_team.into_team(id))
    }

    async fn get_team(&self, id: Id) -> AppResult<Option<Team>> {
        self.repo.find_by_id(id).await
    }

    async fn update_team(&self, team: Team) -> AppResult<Team> {
        self.repo.update(&team).await
    }
}
