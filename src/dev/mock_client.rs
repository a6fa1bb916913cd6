/// Mock NHL API client for development and testing
use crate::api::wire::{
    ClubScheduleResponse, GameLandingResponse, PlayerLandingResponse, RosterResponse,
    ScoreboardResponse, StandingsResponse,
};
use crate::data_provider::DataProvider;
use crate::error::TransportError;
use crate::fixtures;
use crate::season::SeasonId;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use tracing::info;

/// Mock client that returns fixture data instead of making real API calls
#[derive(Debug, Default)]
pub struct MockClient {
    failing_players: HashSet<u64>,
    failing_games: HashSet<u64>,
    fail_schedule: bool,
}

impl MockClient {
    /// Create a new mock client
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self::default()
    }

    /// Make `player_landing` fail for this player
    pub fn with_failing_player(mut self, player_id: u64) -> Self {
        self.failing_players.insert(player_id);
        self
    }

    /// Make `game_landing` fail for this game
    pub fn with_failing_game(mut self, game_id: u64) -> Self {
        self.failing_games.insert(game_id);
        self
    }

    /// Make `club_schedule` fail for every team
    pub fn with_failing_schedule(mut self) -> Self {
        self.fail_schedule = true;
        self
    }

    fn decode<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, TransportError> {
        serde_json::from_str(body).map_err(|e| TransportError::Decode {
            url: format!("mock://{}", path),
            message: e.to_string(),
        })
    }

    fn unavailable(path: String) -> TransportError {
        TransportError::Status {
            url: format!("mock://{}", path),
            status: 503,
        }
    }
}

#[async_trait]
impl DataProvider for MockClient {
    async fn current_standings(&self) -> Result<StandingsResponse, TransportError> {
        info!("MockClient: Returning mock standings");
        Self::decode("standings/now", fixtures::STANDINGS_JSON)
    }

    async fn scoreboard(&self, date: &str) -> Result<ScoreboardResponse, TransportError> {
        info!("MockClient: Returning mock scoreboard for date: {}", date);
        Self::decode("scoreboard", fixtures::SCOREBOARD_JSON)
    }

    async fn club_schedule(
        &self,
        team_abbrev: &str,
    ) -> Result<ClubScheduleResponse, TransportError> {
        let path = format!("club-schedule-season/{}/now", team_abbrev);
        if self.fail_schedule {
            return Err(Self::unavailable(path));
        }
        info!("MockClient: Returning mock schedule for {}", team_abbrev);
        Self::decode(&path, fixtures::CLUB_SCHEDULE_JSON)
    }

    async fn roster(
        &self,
        team_abbrev: &str,
        season: &SeasonId,
    ) -> Result<RosterResponse, TransportError> {
        info!("MockClient: Returning mock roster for {} {}", team_abbrev, season);
        Self::decode(
            &format!("roster/{}/{}", team_abbrev, season),
            &fixtures::roster_json(),
        )
    }

    async fn player_landing(
        &self,
        player_id: u64,
    ) -> Result<PlayerLandingResponse, TransportError> {
        let path = format!("player/{}/landing", player_id);
        if self.failing_players.contains(&player_id) {
            return Err(Self::unavailable(path));
        }
        info!("MockClient: Returning mock player landing for {}", player_id);
        Self::decode(&path, &fixtures::player_landing_json(player_id))
    }

    async fn game_landing(&self, game_id: u64) -> Result<GameLandingResponse, TransportError> {
        let path = format!("gamecenter/{}/landing", game_id);
        if self.failing_games.contains(&game_id) {
            return Err(Self::unavailable(path));
        }
        info!("MockClient: Returning mock game landing for game {}", game_id);
        Self::decode(&path, &fixtures::game_landing_json(game_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_serves_fixtures() {
        let client = MockClient::new();
        let standings = client.current_standings().await.unwrap();
        assert_eq!(standings.standings.unwrap().len(), 8);

        let landing = client.game_landing(fixtures::FINAL_GAME_ID).await.unwrap();
        assert_eq!(landing.id, Some(fixtures::FINAL_GAME_ID));
    }

    #[tokio::test]
    async fn test_mock_client_configured_failures() {
        let client = MockClient::new()
            .with_failing_player(8477956)
            .with_failing_game(fixtures::LIVE_GAME_ID)
            .with_failing_schedule();

        assert!(matches!(
            client.player_landing(8477956).await,
            Err(TransportError::Status { status: 503, .. })
        ));
        assert!(client.player_landing(8473419).await.is_ok());
        assert!(client.game_landing(fixtures::LIVE_GAME_ID).await.is_err());
        assert!(client.club_schedule("BOS").await.is_err());
    }
}
