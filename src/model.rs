/// Trusted domain model
///
/// Everything here is a value object built fresh from each fetch. The adapter
/// module is the only producer of these types from upstream data.
use chrono::{DateTime, Utc};
use std::fmt;

/// One team's current season line
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRecord {
    pub name: String,
    pub abbrev: String,
    pub division_name: String,
    pub wins: u32,
    pub losses: u32,
    pub otl: u32,
    pub points: u32,
    /// Only known in a game context
    pub shots_on_goal: Option<u32>,
    pub logo: Option<String>,
}

impl TeamRecord {
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.otl
    }
}

/// A team placed in its division table
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTeam {
    pub record: TeamRecord,
    pub games_behind: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DivisionStandings {
    pub division_name: String,
    pub teams: Vec<RankedTeam>,
}

impl DivisionStandings {
    pub fn leader(&self) -> Option<&RankedTeam> {
        self.teams.first()
    }
}

/// Game state as reported by the upstream `gameState` code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameState {
    Live,
    Critical,
    Future,
    PreGame,
    Final,
    Off,
    Other(String),
}

impl GameState {
    pub fn from_code(code: &str) -> Self {
        match code {
            "LIVE" => Self::Live,
            "CRIT" => Self::Critical,
            "FUT" => Self::Future,
            "PRE" => Self::PreGame,
            "FINAL" => Self::Final,
            "OFF" => Self::Off,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Live => "LIVE",
            Self::Critical => "CRIT",
            Self::Future => "FUT",
            Self::PreGame => "PRE",
            Self::Final => "FINAL",
            Self::Off => "OFF",
            Self::Other(code) => code,
        }
    }

    /// Display label; unknown codes pass through unchanged
    pub fn label(&self) -> &str {
        match self {
            Self::Live | Self::Critical => "Live",
            Self::Future | Self::PreGame => "Scheduled",
            Self::Final | Self::Off => "Final",
            Self::Other(code) => code,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Self::Final | Self::Off)
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live | Self::Critical)
    }

    pub fn has_started(&self) -> bool {
        self.is_live() || self.is_final()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One side of a game
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameTeam {
    pub abbrev: String,
    pub logo: Option<String>,
    pub score: Option<u32>,
    pub shots_on_goal: Option<u32>,
}

/// One scheduled, live or completed contest
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub id: u64,
    pub away: GameTeam,
    pub home: GameTeam,
    pub state: GameState,
    pub start_time_utc: Option<DateTime<Utc>>,
}

/// Entry in a club's season schedule
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledGame {
    pub id: u64,
    pub game_date: String,
    pub away_abbrev: String,
    pub home_abbrev: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub time_in_period: String,
    pub scorer: String,
    pub team_abbrev: String,
}

/// Goals recorded in one period, in upstream event order
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringPeriod {
    pub number: u32,
    pub goals: Vec<Goal>,
}

/// Game landing: summary plus the nested scoring structure
#[derive(Debug, Clone, PartialEq)]
pub struct GameDetail {
    pub summary: GameSummary,
    /// `None` when the upstream has no scoring summary yet
    pub scoring: Option<Vec<ScoringPeriod>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringPlay {
    pub period: u32,
    pub time: String,
    pub player: String,
    pub team: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodScore {
    pub period: u32,
    pub home: u32,
    pub away: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterPlayer {
    pub id: u64,
    pub sweater_number: Option<u32>,
    pub first_name: String,
    pub last_name: String,
}

impl RosterPlayer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Roster {
    pub forwards: Vec<RosterPlayer>,
    pub defensemen: Vec<RosterPlayer>,
    pub goalies: Vec<RosterPlayer>,
}

impl Roster {
    /// Forwards followed by defensemen; goalies are not skaters
    pub fn skaters(&self) -> impl Iterator<Item = &RosterPlayer> {
        self.forwards.iter().chain(self.defensemen.iter())
    }

    /// Position groups in display order
    pub fn groups(&self) -> [(&'static str, &[RosterPlayer]); 3] {
        [
            ("Forwards", &self.forwards),
            ("Defensemen", &self.defensemen),
            ("Goalies", &self.goalies),
        ]
    }
}

/// Season scoring line for one player. `points` is taken from upstream as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSeasonTotal {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub goals: u32,
    pub assists: u32,
    pub points: u32,
}

impl PlayerSeasonTotal {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
