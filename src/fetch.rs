/// Fetch-then-transform operations, one per screen
///
/// Each operation awaits the data provider, then hands the raw response to
/// the adapters and aggregators. Transport and adapter failures surface as
/// `NhlError`; failures inside a fan-out are logged and dropped.
use crate::adapter;
use crate::data_provider::DataProvider;
use crate::error::NhlError;
use crate::model::{
    DivisionStandings, GameDetail, GameSummary, PlayerSeasonTotal, Roster, ScheduledGame,
};
use crate::roster;
use crate::season::SeasonId;
use crate::standings::aggregate_standings;
use crate::view::{GameView, ScoreboardView, StandingsView, TeamView};
use futures::future::join_all;
use std::collections::HashMap;
use tracing::{debug, warn};

pub async fn fetch_standings(
    provider: &dyn DataProvider,
) -> Result<Vec<DivisionStandings>, NhlError> {
    let response = provider.current_standings().await?;
    let teams = adapter::adapt_standings(response.standings.as_deref().unwrap_or_default())?;
    debug!("Adapted {} standings records", teams.len());
    Ok(aggregate_standings(teams))
}

/// Games listed for `date` (YYYY-MM-DD). A date absent from the scoreboard has no games.
pub async fn fetch_scores(
    provider: &dyn DataProvider,
    date: &str,
) -> Result<Vec<GameSummary>, NhlError> {
    let response = provider.scoreboard(date).await?;
    let games = adapter::adapt_scoreboard_day(&response, date)?;
    debug!("Scoreboard for {}: {} games", date, games.len());
    Ok(games)
}

pub async fn fetch_game_details(
    provider: &dyn DataProvider,
    game_id: u64,
) -> Result<GameDetail, NhlError> {
    let response = provider.game_landing(game_id).await?;
    Ok(adapter::adapt_game_detail(&response)?)
}

/// Landing details for every started game, fetched concurrently.
///
/// Games that have not started are not requested. A game whose detail
/// cannot be fetched or adapted is missing from the map.
pub async fn fetch_game_details_batch(
    provider: &dyn DataProvider,
    games: &[GameSummary],
) -> HashMap<u64, GameDetail> {
    let requests = games
        .iter()
        .filter(|game| game.state.has_started())
        .map(|game| async move {
            match fetch_game_details(provider, game.id).await {
                Ok(detail) => Some((game.id, detail)),
                Err(e) => {
                    warn!("No detail for game {}: {}", game.id, e);
                    None
                }
            }
        });

    let details: HashMap<u64, GameDetail> = join_all(requests).await.into_iter().flatten().collect();
    debug!("Enriched {} of {} games", details.len(), games.len());
    details
}

pub async fn fetch_team_schedule(
    provider: &dyn DataProvider,
    team_abbrev: &str,
) -> Result<Vec<ScheduledGame>, NhlError> {
    let response = provider.club_schedule(team_abbrev).await?;
    Ok(adapter::adapt_club_schedule(&response)?)
}

pub async fn fetch_team_roster(
    provider: &dyn DataProvider,
    team_abbrev: &str,
    season: &SeasonId,
) -> Result<Roster, NhlError> {
    let response = provider.roster(team_abbrev, season).await?;
    Ok(adapter::adapt_roster(&response)?)
}

pub async fn fetch_player_total(
    provider: &dyn DataProvider,
    player_id: u64,
    season: &SeasonId,
) -> Result<PlayerSeasonTotal, NhlError> {
    let response = provider.player_landing(player_id).await?;
    Ok(adapter::adapt_player_total(&response, season))
}

/// Top `limit` skaters by points; players whose stats cannot be fetched are skipped
pub async fn fetch_top_scorers(
    provider: &dyn DataProvider,
    roster: &Roster,
    season: &SeasonId,
    limit: usize,
) -> Vec<PlayerSeasonTotal> {
    roster::top_scorers(
        roster,
        |player_id| fetch_player_total(provider, player_id, season),
        limit,
    )
    .await
}

pub async fn fetch_standings_view(provider: &dyn DataProvider) -> Result<StandingsView, NhlError> {
    Ok(StandingsView::new(fetch_standings(provider).await?))
}

/// Scoreboard for `date` with period tallies for every game whose detail resolved
pub async fn fetch_scoreboard_view(
    provider: &dyn DataProvider,
    date: &str,
) -> Result<ScoreboardView, NhlError> {
    let games = fetch_scores(provider, date).await?;
    let details = fetch_game_details_batch(provider, &games).await;
    Ok(ScoreboardView::assemble(date, games, &details))
}

pub async fn fetch_game_view(
    provider: &dyn DataProvider,
    game_id: u64,
) -> Result<GameView, NhlError> {
    Ok(GameView::from_detail(fetch_game_details(provider, game_id).await?))
}

/// Team screen: roster and schedule load together and both must succeed
pub async fn fetch_team_view(
    provider: &dyn DataProvider,
    team_abbrev: &str,
    season: SeasonId,
    limit: usize,
) -> Result<TeamView, NhlError> {
    let (team_roster, schedule) = tokio::try_join!(
        fetch_team_roster(provider, team_abbrev, &season),
        fetch_team_schedule(provider, team_abbrev)
    )?;
    let top_scorers = fetch_top_scorers(provider, &team_roster, &season, limit).await;

    Ok(TeamView::assemble(
        team_abbrev,
        season,
        team_roster,
        schedule,
        top_scorers,
    ))
}
