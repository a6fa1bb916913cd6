use crate::api::wire::{
    ClubScheduleResponse, GameLandingResponse, PlayerLandingResponse, RosterResponse,
    ScoreboardResponse, StandingsResponse,
};
use crate::data_provider::DataProvider;
use crate::error::TransportError;
use crate::season::SeasonId;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api-web.nhle.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where and how the client talks to the upstream API
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub base_url: String,
    /// Prepended verbatim to every request URL (e.g. a cross-origin proxy)
    pub proxy_prefix: Option<String>,
    pub timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            proxy_prefix: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// HTTP client for the public NHL web API
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    settings: ClientSettings,
}

impl Client {
    pub fn new(settings: ClientSettings) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(settings.timeout)
            .build()
            .map_err(|e| TransportError::Network {
                url: settings.base_url.clone(),
                message: e.to_string(),
            })?;
        Ok(Self { http, settings })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Full request URL for an API path such as `standings/now`
    pub fn url_for(&self, path: &str) -> String {
        let base = self.settings.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        match &self.settings.proxy_prefix {
            Some(prefix) => format!("{prefix}{base}/{path}"),
            None => format!("{base}/{path}"),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        let url = self.url_for(path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| TransportError::Network {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| TransportError::Network {
            url: url.clone(),
            message: e.to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|e| TransportError::Decode {
            url,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl DataProvider for Client {
    async fn current_standings(&self) -> Result<StandingsResponse, TransportError> {
        self.get("standings/now").await
    }

    async fn scoreboard(&self, date: &str) -> Result<ScoreboardResponse, TransportError> {
        self.get(&format!("scoreboard/{date}")).await
    }

    async fn club_schedule(
        &self,
        team_abbrev: &str,
    ) -> Result<ClubScheduleResponse, TransportError> {
        self.get(&format!("club-schedule-season/{team_abbrev}/now"))
            .await
    }

    async fn roster(
        &self,
        team_abbrev: &str,
        season: &SeasonId,
    ) -> Result<RosterResponse, TransportError> {
        self.get(&format!("roster/{team_abbrev}/{season}")).await
    }

    async fn player_landing(
        &self,
        player_id: u64,
    ) -> Result<PlayerLandingResponse, TransportError> {
        self.get(&format!("player/{player_id}/landing")).await
    }

    async fn game_landing(&self, game_id: u64) -> Result<GameLandingResponse, TransportError> {
        self.get(&format!("gamecenter/{game_id}/landing")).await
    }
}
