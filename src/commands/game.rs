use crate::commands::format_start_time;
use crate::commands::score_table::format_score_table;
use crate::config::Config;
use crate::data_provider::DataProvider;
use crate::fetch::fetch_game_view;
use crate::formatting::format_header;
use crate::model::ScoringPlay;
use crate::view::GameView;
use anyhow::{Context, Result};

fn format_goal_line(play: &ScoringPlay) -> String {
    format!("P{} {} - {} ({})", play.period, play.time, play.player, play.team)
}

pub fn format_game(view: &GameView, config: &Config) -> String {
    let game = &view.game;
    let (home_total, away_total) = view.totals;
    let mut output = String::new();

    let title = format!(
        "{} {} - {} {}",
        game.away.abbrev,
        game.away.score.unwrap_or(away_total),
        game.home.score.unwrap_or(home_total),
        game.home.abbrev
    );
    output.push('\n');
    output.push_str(&format_header(&title, true, &config.display));

    if game.state.has_started() {
        output.push_str(&format!("Status: {}\n", view.status));
    } else {
        output.push_str(&format!(
            "Status: {} ({})\n",
            view.status,
            format_start_time(game.start_time_utc, &config.time_format)
        ));
    }

    output.push('\n');
    output.push_str(&format_header("Goals", false, &config.display));
    if view.plays.is_empty() {
        output.push_str("No goals yet.\n");
    } else {
        for play in &view.plays {
            output.push_str(&format_goal_line(play));
            output.push('\n');
        }
    }

    if !view.period_scores.is_empty() {
        output.push('\n');
        output.push_str(&format_score_table(
            &game.away.abbrev,
            &game.home.abbrev,
            &view.period_scores,
            &config.display,
        ));
    }

    if let (Some(away), Some(home)) = (game.away.shots_on_goal, game.home.shots_on_goal) {
        output.push('\n');
        output.push_str(&format!("Shots on goal: {} {}, {} {}\n", game.away.abbrev, away, game.home.abbrev, home));
    }

    output
}

pub async fn run(client: &dyn DataProvider, game_id: u64, config: &Config) -> Result<()> {
    let view = fetch_game_view(client, game_id)
        .await
        .with_context(|| format!("Failed to fetch game {}", game_id))?;

    print!("{}", format_game(&view, config));

    Ok(())
}
