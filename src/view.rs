/// View Model Assembler
///
/// Screen-shaped structs composed from already-transformed domain values.
/// Nothing here fetches or fails.
use crate::model::{
    DivisionStandings, GameDetail, GameSummary, PeriodScore, PlayerSeasonTotal, Roster,
    ScheduledGame, ScoringPlay,
};
use crate::season::SeasonId;
use crate::summary::{period_scores, scoring_plays, total_goals};
use std::collections::HashMap;

const LOGO_BASE_URL: &str = "https://assets.nhle.com/logos/nhl/svg";

/// Light-theme SVG logo for a team abbreviation
pub fn logo_url(team_abbrev: &str) -> String {
    format!("{}/{}_light.svg", LOGO_BASE_URL, team_abbrev.to_uppercase())
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandingsView {
    pub divisions: Vec<DivisionStandings>,
}

impl StandingsView {
    pub fn new(divisions: Vec<DivisionStandings>) -> Self {
        Self { divisions }
    }

    pub fn is_empty(&self) -> bool {
        self.divisions.is_empty()
    }
}

/// One game on the scoreboard
#[derive(Debug, Clone, PartialEq)]
pub struct GameCard {
    pub game: GameSummary,
    pub status: String,
    /// Present only when the game's landing detail was fetched
    pub period_scores: Option<Vec<PeriodScore>>,
    /// (away, home)
    pub shots_on_goal: Option<(u32, u32)>,
}

impl GameCard {
    pub fn new(game: GameSummary, detail: Option<&GameDetail>) -> Self {
        let status = game.state.label().to_string();
        let period_scores = detail.map(period_scores);
        let shots_on_goal = detail.and_then(|d| {
            Some((d.summary.away.shots_on_goal?, d.summary.home.shots_on_goal?))
        });
        Self {
            game,
            status,
            period_scores,
            shots_on_goal,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreboardView {
    pub date: String,
    pub cards: Vec<GameCard>,
}

impl ScoreboardView {
    /// Cards in scoreboard order; `details` may cover any subset of the games
    pub fn assemble(
        date: &str,
        games: Vec<GameSummary>,
        details: &HashMap<u64, GameDetail>,
    ) -> Self {
        let cards = games
            .into_iter()
            .map(|game| {
                let detail = details.get(&game.id);
                GameCard::new(game, detail)
            })
            .collect();
        Self {
            date: date.to_string(),
            cards,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    pub game: GameSummary,
    pub status: String,
    pub plays: Vec<ScoringPlay>,
    pub period_scores: Vec<PeriodScore>,
    /// (home, away) summed from the period tallies
    pub totals: (u32, u32),
}

impl GameView {
    pub fn from_detail(detail: GameDetail) -> Self {
        let plays = scoring_plays(&detail);
        let period_scores = period_scores(&detail);
        let totals = total_goals(&period_scores);
        Self {
            status: detail.summary.state.label().to_string(),
            game: detail.summary,
            plays,
            period_scores,
            totals,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamView {
    pub abbrev: String,
    pub logo_url: String,
    pub season: SeasonId,
    pub roster: Roster,
    pub schedule: Vec<ScheduledGame>,
    pub top_scorers: Vec<PlayerSeasonTotal>,
}

impl TeamView {
    pub fn assemble(
        team_abbrev: &str,
        season: SeasonId,
        roster: Roster,
        schedule: Vec<ScheduledGame>,
        top_scorers: Vec<PlayerSeasonTotal>,
    ) -> Self {
        Self {
            abbrev: team_abbrev.to_uppercase(),
            logo_url: logo_url(team_abbrev),
            season,
            roster,
            schedule,
            top_scorers,
        }
    }
}
