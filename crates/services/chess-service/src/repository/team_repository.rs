//! Team repository contract.

use async_trait::async_trait;

use common::AppResult;
use domain::{Id, NewTeam, Team};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Team repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Store a new team and return the assigned id
    async fn create(&self, new_team: &NewTeam) -> AppResult<Id>;

    /// Find team by ID; `None` means the team does not exist
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Team>>;

    /// Overwrite a stored team (`NotFound` if it does not exist)
    async fn update(&self, team: &Team) -> AppResult<Team>;
}
