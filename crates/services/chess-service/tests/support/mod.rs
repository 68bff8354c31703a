//! In-memory repository fakes shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use chess_service_lib::repository::{GameRepository, PlayerRepository, TeamRepository};
use chess_service_lib::Services;
use common::{AppError, AppResult};
use domain::{Game, Id, NewGame, NewPlayer, NewTeam, Player, Team};

/// Hands out increasing ids starting at 1
#[derive(Default)]
struct Sequence(AtomicI32);

impl Sequence {
    fn next(&self) -> Id {
        Id::new(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[derive(Default)]
pub struct InMemoryPlayers {
    ids: Sequence,
    players: Mutex<Vec<Player>>,
    seats: Mutex<HashMap<Id, Vec<Id>>>,
}

impl InMemoryPlayers {
    /// Record that `player_id` takes part in `game_id`
    pub fn seat(&self, game_id: Id, player_id: Id) {
        self.seats
            .lock()
            .unwrap()
            .entry(game_id)
            .or_default()
            .push(player_id);
    }

    pub fn len(&self) -> usize {
        self.players.lock().unwrap().len()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayers {
    async fn create(&self, new_player: &NewPlayer) -> AppResult<Id> {
        tokio::task::yield_now().await;
        let id = self.ids.next();
        self.players
            .lock()
            .unwrap()
            .push(Player::new(id, new_player.email.clone()));
        Ok(id)
    }

    async fn find_by_id(&self, id: Id) -> AppResult<Option<Player>> {
        Ok(self
            .players
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list_by_game(&self, game_id: Id) -> AppResult<Vec<Player>> {
        let seated = self
            .seats
            .lock()
            .unwrap()
            .get(&game_id)
            .cloned()
            .unwrap_or_default();
        let players = self.players.lock().unwrap();
        Ok(seated
            .iter()
            .filter_map(|id| players.iter().find(|p| p.id == *id).cloned())
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryTeams {
    ids: Sequence,
    teams: Mutex<HashMap<Id, Team>>,
}

#[async_trait]
impl TeamRepository for InMemoryTeams {
    async fn create(&self, new_team: &NewTeam) -> AppResult<Id> {
        let id = self.ids.next();
        self.teams
            .lock()
            .unwrap()
            .insert(id, Team::new(id, new_team.name.clone()));
        Ok(id)
    }

    async fn find_by_id(&self, id: Id) -> AppResult<Option<Team>> {
        tokio::task::yield_now().await;
        Ok(self.teams.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, team: &Team) -> AppResult<Team> {
        let mut teams = self.teams.lock().unwrap();
        let stored = teams.get_mut(&team.id).ok_or(AppError::NotFound)?;
        *stored = team.clone();
        Ok(team.clone())
    }
}

#[derive(Default)]
pub struct InMemoryGames {
    ids: Sequence,
    games: Mutex<HashMap<Id, Game>>,
}

impl InMemoryGames {
    pub fn len(&self) -> usize {
        self.games.lock().unwrap().len()
    }

    pub fn stored(&self, id: Id) -> Option<Game> {
        self.games.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl GameRepository for InMemoryGames {
    async fn create(&self, new_game: &NewGame) -> AppResult<Id> {
        tokio::task::yield_now().await;
        let id = self.ids.next();
        self.games
            .lock()
            .unwrap()
            .insert(id, new_game.into_game(id));
        Ok(id)
    }

    async fn find_by_id(&self, id: Id) -> AppResult<Option<Game>> {
        tokio::task::yield_now().await;
        Ok(self.games.lock().unwrap().get(&id).cloned())
    }

    async fn join(&self, id: Id, blacks: Id) -> AppResult<Option<Game>> {
        tokio::task::yield_now().await;
        let mut games = self.games.lock().unwrap();
        let stored = games.get_mut(&id).ok_or(AppError::NotFound)?;
        if stored.blacks.is_some() {
            return Ok(None);
        }
        stored.blacks = Some(blacks);
        Ok(Some(stored.clone()))
    }
}

/// Services wired over fresh in-memory stores
pub struct Fixture {
    pub players: Arc<InMemoryPlayers>,
    pub teams: Arc<InMemoryTeams>,
    pub games: Arc<InMemoryGames>,
    pub services: Services,
}

impl Fixture {
    pub fn new() -> Self {
        let players = Arc::new(InMemoryPlayers::default());
        let teams = Arc::new(InMemoryTeams::default());
        let games = Arc::new(InMemoryGames::default());
        let services = Services::from_repositories(players.clone(), teams.clone(), games.clone());

        Self {
            players,
            teams,
            games,
            services,
        }
    }
}
