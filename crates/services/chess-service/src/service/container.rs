//! Service Container - Explicit composition of the chess services.
//!
//! Each service receives its collaborators through its constructor; the
//! game service shares the container's team service for its existence
//! checks.

use std::sync::Arc;

use super::{GameManager, GameService, PlayerManager, PlayerService, TeamManager, TeamService};
use crate::repository::{GameRepository, PlayerRepository, TeamRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get player service
    fn players(&self) -> Arc<dyn PlayerService>;

    /// Get team service
    fn teams(&self) -> Arc<dyn TeamService>;

    /// Get game service
    fn games(&self) -> Arc<dyn GameService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    player_service: Arc<dyn PlayerService>,
    team_service: Arc<dyn TeamService>,
    game_service: Arc<dyn GameService>,
}

impl Services {
    /// Create a new service container from already built services
    pub fn new(
        player_service: Arc<dyn PlayerService>,
        team_service: Arc<dyn TeamService>,
        game_service: Arc<dyn GameService>,
    ) -> Self {
        Self {
            player_service,
            team_service,
            game_service,
        }
    }

    /// Wire the default managers over the given repositories
    pub fn from_repositories(
        player_repo: Arc<dyn PlayerRepository>,
        team_repo: Arc<dyn TeamRepository>,
        game_repo: Arc<dyn GameRepository>,
    ) -> Self {
        let player_service = Arc::new(PlayerManager::new(player_repo));
        let team_service: Arc<dyn TeamService> = Arc::new(TeamManager::new(team_repo));
        let game_service = Arc::new(GameManager::new(game_repo, team_service.clone()));

        Self {
            player_service,
            team_service,
            game_service,
        }
    }
}

impl ServiceContainer for Services {
    fn players(&self) -> Arc<dyn PlayerService> {
        self.player_service.clone()
    }

    fn teams(&self) -> Arc<dyn TeamService> {
        self.team_service.clone()
    }

    fn games(&self) -> Arc<dyn GameService> {
        self.game_service.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockGameRepository, MockPlayerRepository, MockTeamRepository};
    use domain::{Id, NewGame, Team};

    #[tokio::test]
    async fn test_game_service_uses_team_repository_for_checks() {
        let mut team_repo = MockTeamRepository::new();
        team_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        let mut game_repo = MockGameRepository::new();
        game_repo.expect_create().never();

        let services = Services::from_repositories(
            Arc::new(MockPlayerRepository::new()),
            Arc::new(team_repo),
            Arc::new(game_repo),
        );

        let result = services.games().add_game(NewGame::new(Id::new(1))).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_container_hands_out_services() {
        let mut container = MockServiceContainer::new();
        container
            .expect_teams()
            .times(1)
            .returning(|| -> Arc<dyn TeamService> {
                let mut teams = crate::service::MockTeamService::new();
                teams
                    .expect_get_team()
                    .returning(|id| Ok(Some(Team::new(id, "Caro-Kann"))));
                Arc::new(teams)
            });

        let team = container.teams().get_team(Id::new(6)).await.unwrap();
        assert_eq!(team, Some(Team::new(Id::new(6), "Caro-Kann")));
    }

    #[tokio::test]
    async fn test_services_hand_back_given_services() {
        let mut teams = crate::service::MockTeamService::new();
        teams.expect_get_team().times(1).returning(|_| Ok(None));
        let teams: Arc<dyn TeamService> = Arc::new(teams);

        let services = Services::new(
            Arc::new(crate::service::MockPlayerService::new()),
            teams,
            Arc::new(crate::service::MockGameService::new()),
        );

        assert_eq!(services.teams().get_team(Id::new(2)).await.unwrap(), None);
    }
}
