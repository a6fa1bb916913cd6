/// Trait for providing raw NHL data, abstracting over the real HTTP client and mock implementations
use crate::api::wire::{
    ClubScheduleResponse, GameLandingResponse, PlayerLandingResponse, RosterResponse,
    ScoreboardResponse, StandingsResponse,
};
use crate::error::TransportError;
use crate::season::SeasonId;
use async_trait::async_trait;

/// Trait for NHL data providers, implemented by both the real Client and MockClient
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// `GET /standings/now`
    async fn current_standings(&self) -> Result<StandingsResponse, TransportError>;

    /// `GET /scoreboard/{date}`, date as YYYY-MM-DD
    async fn scoreboard(&self, date: &str) -> Result<ScoreboardResponse, TransportError>;

    /// `GET /club-schedule-season/{team}/now`
    async fn club_schedule(&self, team_abbrev: &str)
        -> Result<ClubScheduleResponse, TransportError>;

    /// `GET /roster/{team}/{season}`
    async fn roster(
        &self,
        team_abbrev: &str,
        season: &SeasonId,
    ) -> Result<RosterResponse, TransportError>;

    /// `GET /player/{id}/landing`
    async fn player_landing(&self, player_id: u64)
        -> Result<PlayerLandingResponse, TransportError>;

    /// `GET /gamecenter/{id}/landing`
    async fn game_landing(&self, game_id: u64) -> Result<GameLandingResponse, TransportError>;
}
