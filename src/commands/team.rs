use crate::config::{Config, DisplayConfig};
use crate::data_provider::DataProvider;
use crate::fetch::fetch_team_view;
use crate::formatting::{format_header, format_rule};
use crate::model::{PlayerSeasonTotal, RosterPlayer, ScheduledGame};
use crate::season::{current_season, SeasonId};
use crate::view::TeamView;
use anyhow::{anyhow, Context, Result};
use chrono::Local;

// Layout Constants
/// Width of sweater number column
const NUMBER_COL_WIDTH: usize = 3;

/// Width of player name column
const NAME_COL_WIDTH: usize = 24;

/// Width of each stat column (G, A, P)
const STAT_COL_WIDTH: usize = 4;

fn format_roster_player(player: &RosterPlayer) -> String {
    let number = player
        .sweater_number
        .map(|n| format!("#{}", n))
        .unwrap_or_default();
    format!("{:>width$}  {}", number, player.full_name(), width = NUMBER_COL_WIDTH)
}

fn format_top_scorers(scorers: &[PlayerSeasonTotal], display: &DisplayConfig) -> String {
    let mut output = format!(
        "{:<name$} {:>stat$} {:>stat$} {:>stat$}\n",
        "Player",
        "G",
        "A",
        "P",
        name = NAME_COL_WIDTH,
        stat = STAT_COL_WIDTH
    );
    output.push_str(&format_rule(NAME_COL_WIDTH + 3 * (STAT_COL_WIDTH + 1), display));
    output.push('\n');
    for scorer in scorers {
        output.push_str(&format!(
            "{:<name$} {:>stat$} {:>stat$} {:>stat$}\n",
            scorer.full_name(),
            scorer.goals,
            scorer.assists,
            scorer.points,
            name = NAME_COL_WIDTH,
            stat = STAT_COL_WIDTH
        ));
    }
    output
}

fn format_schedule_line(game: &ScheduledGame, team_abbrev: &str) -> String {
    if game.home_abbrev == team_abbrev {
        format!("{}  vs {}", game.game_date, game.away_abbrev)
    } else {
        format!("{}  @  {}", game.game_date, game.home_abbrev)
    }
}

pub fn format_team(view: &TeamView, display: &DisplayConfig) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header(&format!("{} - {}", view.abbrev, view.season), true, display));
    output.push_str(&format!("Logo: {}\n", view.logo_url));

    output.push('\n');
    output.push_str(&format_header("Top Scorers", false, display));
    if view.top_scorers.is_empty() {
        output.push_str("No scoring data available.\n");
    } else {
        output.push_str(&format_top_scorers(&view.top_scorers, display));
    }

    for (group, players) in view.roster.groups() {
        output.push('\n');
        output.push_str(&format_header(group, false, display));
        if players.is_empty() {
            output.push_str("(none)\n");
        }
        for player in players {
            output.push_str(&format_roster_player(player));
            output.push('\n');
        }
    }

    output.push('\n');
    output.push_str(&format_header("Schedule", false, display));
    if view.schedule.is_empty() {
        output.push_str("No games scheduled.\n");
    }
    for game in &view.schedule {
        output.push_str(&format_schedule_line(game, &view.abbrev));
        output.push('\n');
    }

    output
}

/// Explicit season, or the one in progress today
pub fn resolve_season(season: Option<String>) -> Result<SeasonId> {
    match season {
        Some(s) => s.parse::<SeasonId>().map_err(|e| anyhow!(e)),
        None => Ok(current_season(&Local::now().date_naive())),
    }
}

pub async fn run(
    client: &dyn DataProvider,
    team_abbrev: &str,
    season: Option<String>,
    top: Option<usize>,
    config: &Config,
) -> Result<()> {
    let season = resolve_season(season)?;
    let limit = top.unwrap_or(config.top_scorer_limit);
    let team_abbrev = team_abbrev.to_uppercase();

    let view = fetch_team_view(client, &team_abbrev, season, limit)
        .await
        .with_context(|| format!("Failed to load team {} for season {}", team_abbrev, season))?;

    print!("{}", format_team(&view, &config.display));

    Ok(())
}
