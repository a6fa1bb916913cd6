/// Raw upstream JSON shapes.
///
/// Every field is optional: these types describe what the API *might* send.
/// The adapter module turns them into the trusted domain model.
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct LocalizedString {
    pub default: Option<String>,
}

impl LocalizedString {
    pub fn text(&self) -> Option<&str> {
        self.default.as_deref()
    }
}

/// Season ids show up both as numbers and as strings depending on the endpoint
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawSeason {
    Number(u64),
    Text(String),
}

impl RawSeason {
    pub fn as_string(&self) -> String {
        match self {
            RawSeason::Number(n) => n.to_string(),
            RawSeason::Text(s) => s.trim().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// GET /standings/now
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct StandingsResponse {
    pub standings: Option<Vec<RawStanding>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawStanding {
    pub team_name: Option<LocalizedString>,
    pub team_abbrev: Option<LocalizedString>,
    pub division_name: Option<String>,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub ot_losses: Option<u32>,
    pub points: Option<u32>,
    pub team_logo: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /scoreboard/{date}
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardResponse {
    pub games_by_date: Option<Vec<ScoreboardDay>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardDay {
    pub date: Option<String>,
    pub games: Option<Vec<RawGame>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawGame {
    pub id: Option<u64>,
    pub away_team: Option<RawGameTeam>,
    pub home_team: Option<RawGameTeam>,
    pub game_state: Option<String>,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawGameTeam {
    pub abbrev: Option<String>,
    pub logo: Option<String>,
    pub score: Option<u32>,
    pub sog: Option<u32>,
}

// ---------------------------------------------------------------------------
// GET /club-schedule-season/{team}/now
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ClubScheduleResponse {
    pub games: Option<Vec<RawScheduledGame>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawScheduledGame {
    pub id: Option<u64>,
    pub game_date: Option<String>,
    pub away_team: Option<RawGameTeam>,
    pub home_team: Option<RawGameTeam>,
}

// ---------------------------------------------------------------------------
// GET /roster/{team}/{season}
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RosterResponse {
    pub forwards: Option<Vec<RawRosterPlayer>>,
    pub defensemen: Option<Vec<RawRosterPlayer>>,
    pub goalies: Option<Vec<RawRosterPlayer>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawRosterPlayer {
    pub id: Option<u64>,
    pub sweater_number: Option<u32>,
    pub first_name: Option<LocalizedString>,
    pub last_name: Option<LocalizedString>,
}

// ---------------------------------------------------------------------------
// GET /player/{id}/landing
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLandingResponse {
    pub player_id: Option<u64>,
    pub first_name: Option<LocalizedString>,
    pub last_name: Option<LocalizedString>,
    pub season_totals: Option<Vec<RawSeasonTotal>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawSeasonTotal {
    pub season: Option<RawSeason>,
    pub game_type_id: Option<u32>,
    pub goals: Option<u32>,
    pub assists: Option<u32>,
    pub points: Option<u32>,
}

// ---------------------------------------------------------------------------
// GET /gamecenter/{id}/landing
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GameLandingResponse {
    pub id: Option<u64>,
    pub game_state: Option<String>,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: Option<String>,
    pub away_team: Option<RawGameTeam>,
    pub home_team: Option<RawGameTeam>,
    pub summary: Option<RawGameSummary>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawGameSummary {
    pub scoring: Option<Vec<RawScoringPeriod>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawScoringPeriod {
    pub period_descriptor: Option<RawPeriodDescriptor>,
    pub goals: Option<Vec<RawGoal>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawPeriodDescriptor {
    pub number: Option<u32>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawGoal {
    pub time_in_period: Option<String>,
    pub first_name: Option<LocalizedString>,
    pub last_name: Option<LocalizedString>,
    pub team_abbrev: Option<LocalizedString>,
}
