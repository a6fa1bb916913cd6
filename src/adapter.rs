/// Raw Record Adapter
///
/// Maps loosely-typed upstream records into domain values. Missing optional
/// fields degrade to defaults; only structurally required fields fail.
use crate::api::wire::{
    ClubScheduleResponse, GameLandingResponse, LocalizedString, PlayerLandingResponse, RawGame,
    RawGameTeam, RawRosterPlayer, RawScheduledGame, RawScoringPeriod, RawStanding,
    RosterResponse, ScoreboardResponse,
};
use crate::error::AdapterError;
use crate::model::{
    GameDetail, GameState, GameSummary, GameTeam, Goal, PlayerSeasonTotal, Roster, RosterPlayer,
    ScheduledGame, ScoringPeriod, TeamRecord,
};
use crate::season::SeasonId;
use chrono::{DateTime, Utc};

/// `gameTypeId` of regular-season games
pub const REGULAR_SEASON_GAME_TYPE: u32 = 2;

fn localized(value: &Option<LocalizedString>) -> Option<&str> {
    value.as_ref().and_then(LocalizedString::text)
}

fn localized_or_empty(value: &Option<LocalizedString>) -> String {
    localized(value).unwrap_or_default().to_string()
}

fn parse_start_time(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Map one standings record. The team name is the only required field.
pub fn adapt_team(raw: &RawStanding) -> Result<TeamRecord, AdapterError> {
    let name = localized(&raw.team_name).ok_or(AdapterError::missing("standings", "teamName"))?;

    Ok(TeamRecord {
        name: name.to_string(),
        abbrev: localized_or_empty(&raw.team_abbrev),
        division_name: raw.division_name.clone().unwrap_or_default(),
        wins: raw.wins.unwrap_or_default(),
        losses: raw.losses.unwrap_or_default(),
        otl: raw.ot_losses.unwrap_or_default(),
        points: raw.points.unwrap_or_default(),
        shots_on_goal: None,
        logo: raw.team_logo.clone(),
    })
}

fn adapt_game_team(raw: Option<&RawGameTeam>) -> GameTeam {
    match raw {
        Some(team) => GameTeam {
            abbrev: team.abbrev.clone().unwrap_or_default(),
            logo: team.logo.clone(),
            score: team.score,
            shots_on_goal: team.sog,
        },
        None => GameTeam::default(),
    }
}

/// Map one scoreboard game. The game id is required.
pub fn adapt_game(raw: &RawGame) -> Result<GameSummary, AdapterError> {
    let id = raw.id.ok_or(AdapterError::missing("game", "id"))?;

    Ok(GameSummary {
        id,
        away: adapt_game_team(raw.away_team.as_ref()),
        home: adapt_game_team(raw.home_team.as_ref()),
        state: GameState::from_code(raw.game_state.as_deref().unwrap_or_default()),
        start_time_utc: parse_start_time(raw.start_time_utc.as_deref()),
    })
}

/// Pick the regular-season line for `season`; zeros when there is none
pub fn adapt_player_total(raw: &PlayerLandingResponse, season: &SeasonId) -> PlayerSeasonTotal {
    let wanted = season.to_string();
    let line = raw.season_totals.iter().flatten().find(|total| {
        total.game_type_id == Some(REGULAR_SEASON_GAME_TYPE)
            && total.season.as_ref().is_some_and(|s| s.as_string() == wanted)
    });

    PlayerSeasonTotal {
        id: raw.player_id.unwrap_or_default(),
        first_name: localized_or_empty(&raw.first_name),
        last_name: localized_or_empty(&raw.last_name),
        goals: line.and_then(|l| l.goals).unwrap_or_default(),
        assists: line.and_then(|l| l.assists).unwrap_or_default(),
        points: line.and_then(|l| l.points).unwrap_or_default(),
    }
}

/// Map every standings record, failing on the first structurally broken one
pub fn adapt_standings(raw: &[RawStanding]) -> Result<Vec<TeamRecord>, AdapterError> {
    raw.iter().map(adapt_team).collect()
}

/// Games for `date` from a scoreboard response. No matching day means no games.
pub fn adapt_scoreboard_day(
    raw: &ScoreboardResponse,
    date: &str,
) -> Result<Vec<GameSummary>, AdapterError> {
    let day = raw
        .games_by_date
        .iter()
        .flatten()
        .find(|day| day.date.as_deref() == Some(date));

    match day {
        Some(day) => day.games.iter().flatten().map(adapt_game).collect(),
        None => Ok(Vec::new()),
    }
}

pub fn adapt_scheduled_game(raw: &RawScheduledGame) -> Result<ScheduledGame, AdapterError> {
    let id = raw.id.ok_or(AdapterError::missing("schedule game", "id"))?;
    let abbrev = |team: &Option<RawGameTeam>| {
        team.as_ref()
            .and_then(|t| t.abbrev.clone())
            .unwrap_or_default()
    };

    Ok(ScheduledGame {
        id,
        game_date: raw.game_date.clone().unwrap_or_default(),
        away_abbrev: abbrev(&raw.away_team),
        home_abbrev: abbrev(&raw.home_team),
    })
}

pub fn adapt_club_schedule(raw: &ClubScheduleResponse) -> Result<Vec<ScheduledGame>, AdapterError> {
    raw.games.iter().flatten().map(adapt_scheduled_game).collect()
}

fn adapt_roster_player(raw: &RawRosterPlayer) -> Result<RosterPlayer, AdapterError> {
    let id = raw.id.ok_or(AdapterError::missing("roster player", "id"))?;

    Ok(RosterPlayer {
        id,
        sweater_number: raw.sweater_number,
        first_name: localized_or_empty(&raw.first_name),
        last_name: localized_or_empty(&raw.last_name),
    })
}

fn adapt_roster_group(raw: &Option<Vec<RawRosterPlayer>>) -> Result<Vec<RosterPlayer>, AdapterError> {
    raw.iter().flatten().map(adapt_roster_player).collect()
}

pub fn adapt_roster(raw: &RosterResponse) -> Result<Roster, AdapterError> {
    Ok(Roster {
        forwards: adapt_roster_group(&raw.forwards)?,
        defensemen: adapt_roster_group(&raw.defensemen)?,
        goalies: adapt_roster_group(&raw.goalies)?,
    })
}

fn adapt_scoring_period(raw: &RawScoringPeriod) -> ScoringPeriod {
    let goals = raw
        .goals
        .iter()
        .flatten()
        .map(|goal| {
            let first = localized(&goal.first_name).unwrap_or_default();
            let last = localized(&goal.last_name).unwrap_or_default();
            Goal {
                time_in_period: goal.time_in_period.clone().unwrap_or_default(),
                scorer: format!("{} {}", first, last).trim().to_string(),
                team_abbrev: localized_or_empty(&goal.team_abbrev),
            }
        })
        .collect();

    ScoringPeriod {
        number: raw
            .period_descriptor
            .as_ref()
            .and_then(|p| p.number)
            .unwrap_or_default(),
        goals,
    }
}

/// Map a game landing page. The game id is required; scoring may be absent.
pub fn adapt_game_detail(raw: &GameLandingResponse) -> Result<GameDetail, AdapterError> {
    let id = raw.id.ok_or(AdapterError::missing("game landing", "id"))?;

    let summary = GameSummary {
        id,
        away: adapt_game_team(raw.away_team.as_ref()),
        home: adapt_game_team(raw.home_team.as_ref()),
        state: GameState::from_code(raw.game_state.as_deref().unwrap_or_default()),
        start_time_utc: parse_start_time(raw.start_time_utc.as_deref()),
    };

    let scoring = raw
        .summary
        .as_ref()
        .and_then(|s| s.scoring.as_ref())
        .map(|periods| periods.iter().map(adapt_scoring_period).collect());

    Ok(GameDetail { summary, scoring })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn standing(json: &str) -> RawStanding {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_adapt_team_full_record() {
        let raw = standing(
            r#"{"teamName":{"default":"Boston Bruins"},"teamAbbrev":{"default":"BOS"},
                "divisionName":"Atlantic","wins":13,"losses":4,"otLosses":1,"points":27,
                "teamLogo":"https://assets.nhle.com/logos/nhl/svg/BOS_light.svg"}"#,
        );
        let team = adapt_team(&raw).unwrap();
        assert_eq!(team.name, "Boston Bruins");
        assert_eq!(team.abbrev, "BOS");
        assert_eq!(team.division_name, "Atlantic");
        assert_eq!((team.wins, team.losses, team.otl, team.points), (13, 4, 1, 27));
        assert_eq!(
            team.logo.as_deref(),
            Some("https://assets.nhle.com/logos/nhl/svg/BOS_light.svg")
        );
        assert_eq!(team.shots_on_goal, None);
    }

    #[test]
    fn test_adapt_team_defaults_abbrev_and_logo() {
        let raw = standing(r#"{"teamName":{"default":"Utah Hockey Club"},"points":20}"#);
        let team = adapt_team(&raw).unwrap();
        assert_eq!(team.abbrev, "");
        assert_eq!(team.logo, None);
        assert_eq!(team.wins, 0);
    }

    #[test]
    fn test_adapt_team_requires_name() {
        let raw = standing(r#"{"teamAbbrev":{"default":"BOS"},"points":20}"#);
        assert_eq!(
            adapt_team(&raw),
            Err(AdapterError::missing("standings", "teamName"))
        );

        let raw = standing(r#"{"teamName":{},"points":20}"#);
        assert!(adapt_team(&raw).is_err());
    }

    #[test]
    fn test_adapt_game() {
        let raw: RawGame = serde_json::from_str(
            r#"{"id":2024020002,"gameState":"LIVE","startTimeUTC":"2024-11-21T00:30:00Z",
                "awayTeam":{"abbrev":"TOR","logo":"tor.svg","score":2},
                "homeTeam":{"abbrev":"OTT","score":1}}"#,
        )
        .unwrap();
        let game = adapt_game(&raw).unwrap();
        assert_eq!(game.id, 2024020002);
        assert_eq!(game.state, GameState::Live);
        assert_eq!(game.away.abbrev, "TOR");
        assert_eq!(game.away.logo.as_deref(), Some("tor.svg"));
        assert_eq!(game.home.logo, None);
        assert_eq!(game.home.score, Some(1));
        assert!(game.start_time_utc.is_some());
    }

    #[test]
    fn test_adapt_game_requires_id() {
        let raw: RawGame = serde_json::from_str(r#"{"gameState":"FUT"}"#).unwrap();
        assert!(adapt_game(&raw).is_err());
    }

    #[test]
    fn test_adapt_game_bad_start_time_is_absent() {
        let raw: RawGame =
            serde_json::from_str(r#"{"id":1,"startTimeUTC":"tonight"}"#).unwrap();
        let game = adapt_game(&raw).unwrap();
        assert_eq!(game.start_time_utc, None);
        assert_eq!(game.state, GameState::Other(String::new()));
    }

    #[test]
    fn test_adapt_player_total_picks_regular_season_line() {
        let raw: PlayerLandingResponse = serde_json::from_str(
            r#"{"playerId":8478402,"firstName":{"default":"Connor"},"lastName":{"default":"McDavid"},
                "seasonTotals":[
                    {"season":20242025,"gameTypeId":3,"goals":7,"assists":26,"points":33},
                    {"season":20242025,"gameTypeId":2,"goals":26,"assists":74,"points":100},
                    {"season":20232024,"gameTypeId":2,"goals":32,"assists":100,"points":132}
                ]}"#,
        )
        .unwrap();
        let total = adapt_player_total(&raw, &SeasonId::starting(2024));
        assert_eq!(total.id, 8478402);
        assert_eq!(total.full_name(), "Connor McDavid");
        assert_eq!((total.goals, total.assists, total.points), (26, 74, 100));
    }

    #[test]
    fn test_adapt_player_total_no_match_is_zero() {
        let raw: PlayerLandingResponse = serde_json::from_str(
            r#"{"playerId":1,"seasonTotals":[{"season":20232024,"gameTypeId":2,"goals":5,"assists":5,"points":10}]}"#,
        )
        .unwrap();
        let total = adapt_player_total(&raw, &SeasonId::starting(2024));
        assert_eq!((total.goals, total.assists, total.points), (0, 0, 0));
        assert_eq!(total.first_name, "");
    }

    #[test]
    fn test_adapt_player_total_trusts_upstream_points() {
        let raw: PlayerLandingResponse = serde_json::from_str(
            r#"{"seasonTotals":[{"season":"20242025","gameTypeId":2,"goals":1,"assists":1,"points":5}]}"#,
        )
        .unwrap();
        let total = adapt_player_total(&raw, &SeasonId::starting(2024));
        assert_eq!(total.points, 5);
    }

    #[test]
    fn test_adapt_scoreboard_day_selects_requested_date() {
        let raw: ScoreboardResponse = serde_json::from_str(fixtures::SCOREBOARD_JSON).unwrap();
        let games = adapt_scoreboard_day(&raw, fixtures::SCOREBOARD_DATE).unwrap();
        assert_eq!(games.len(), 4);
        assert_eq!(games[0].away.abbrev, "MTL");

        let none = adapt_scoreboard_day(&raw, "1999-01-01").unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_adapt_roster_groups() {
        let raw: RosterResponse = serde_json::from_str(&fixtures::roster_json()).unwrap();
        let roster = adapt_roster(&raw).unwrap();
        assert_eq!(roster.forwards.len(), 3);
        assert_eq!(roster.defensemen.len(), 2);
        assert_eq!(roster.goalies.len(), 1);
        assert_eq!(roster.forwards[0].full_name(), "Brad Marchand");
        assert_eq!(roster.forwards[0].sweater_number, Some(63));
    }

    #[test]
    fn test_adapt_roster_missing_groups_are_empty() {
        let raw: RosterResponse = serde_json::from_str(r#"{"forwards":[]}"#).unwrap();
        let roster = adapt_roster(&raw).unwrap();
        assert_eq!(roster, Roster::default());
    }

    #[test]
    fn test_adapt_club_schedule() {
        let raw: ClubScheduleResponse =
            serde_json::from_str(fixtures::CLUB_SCHEDULE_JSON).unwrap();
        let games = adapt_club_schedule(&raw).unwrap();
        assert_eq!(games.len(), 3);
        assert_eq!(games[0].game_date, "2024-10-08");
        assert_eq!(games[0].away_abbrev, "BOS");
        assert_eq!(games[0].home_abbrev, "FLA");
    }

    #[test]
    fn test_adapt_game_detail_with_scoring() {
        let raw: GameLandingResponse =
            serde_json::from_str(&fixtures::game_landing_json(fixtures::FINAL_GAME_ID)).unwrap();
        let detail = adapt_game_detail(&raw).unwrap();
        assert_eq!(detail.summary.home.abbrev, "BOS");
        assert_eq!(detail.summary.home.shots_on_goal, Some(31));
        let periods = detail.scoring.unwrap();
        assert_eq!(periods.len(), 3);
        assert_eq!(periods[0].goals[0].scorer, "David Pastrnak");
        assert_eq!(periods[0].goals[0].team_abbrev, "BOS");
    }

    #[test]
    fn test_adapt_game_detail_without_summary() {
        let raw: GameLandingResponse =
            serde_json::from_str(r#"{"id":7,"gameState":"FUT"}"#).unwrap();
        let detail = adapt_game_detail(&raw).unwrap();
        assert_eq!(detail.scoring, None);
        assert_eq!(detail.summary.state, GameState::Future);
    }
}
