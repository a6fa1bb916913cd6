use crate::config::{Config, DisplayConfig};
use crate::data_provider::DataProvider;
use crate::fetch::fetch_standings_view;
use crate::formatting::{format_header, format_rule};
use crate::model::{DivisionStandings, RankedTeam};
use crate::view::StandingsView;
use anyhow::{Context, Result};

// Layout Constants
/// Width of standings table column (for two-column layout)
const STANDINGS_COLUMN_WIDTH: usize = 48;

/// Width of team name column
const TEAM_NAME_COL_WIDTH: usize = 22;

/// Width of games played column
const GP_COL_WIDTH: usize = 3;

/// Width of wins column
const W_COL_WIDTH: usize = 3;

/// Width of losses column
const L_COL_WIDTH: usize = 3;

/// Width of OT losses column
const OT_COL_WIDTH: usize = 3;

/// Width of points column
const PTS_COL_WIDTH: usize = 4;

/// Width of games behind column
const GB_COL_WIDTH: usize = 4;

/// Spacing between columns in two-column layout
const COLUMN_SPACING: usize = 4;

/// Games behind as shown in the table; the leader shows a dash
fn format_games_behind(team: &RankedTeam) -> String {
    if team.games_behind == 0.0 {
        "-".to_string()
    } else {
        format!("{:.1}", team.games_behind)
    }
}

pub fn format_standings_table(teams: &[RankedTeam], display: &DisplayConfig) -> String {
    let mut output = String::new();

    // Print table header
    output.push_str(&format!(
        "{:<team_width$} {:>gp_width$} {:>w_width$} {:>l_width$} {:>ot_width$} {:>pts_width$} {:>gb_width$}\n",
        "Team",
        "GP",
        "W",
        "L",
        "OTL",
        "PTS",
        "GB",
        team_width = TEAM_NAME_COL_WIDTH,
        gp_width = GP_COL_WIDTH,
        w_width = W_COL_WIDTH,
        l_width = L_COL_WIDTH,
        ot_width = OT_COL_WIDTH,
        pts_width = PTS_COL_WIDTH,
        gb_width = GB_COL_WIDTH
    ));
    output.push_str(&format!(
        "{}\n",
        format_rule(STANDINGS_COLUMN_WIDTH, display)
    ));

    // Print each team's stats
    for team in teams {
        let record = &team.record;
        output.push_str(&format!(
            "{:<team_width$} {:>gp_width$} {:>w_width$} {:>l_width$} {:>ot_width$} {:>pts_width$} {:>gb_width$}\n",
            record.name,
            record.games_played(),
            record.wins,
            record.losses,
            record.otl,
            record.points,
            format_games_behind(team),
            team_width = TEAM_NAME_COL_WIDTH,
            gp_width = GP_COL_WIDTH,
            w_width = W_COL_WIDTH,
            l_width = L_COL_WIDTH,
            ot_width = OT_COL_WIDTH,
            pts_width = PTS_COL_WIDTH,
            gb_width = GB_COL_WIDTH
        ));
    }

    output
}

fn format_division_with_header(division: &DivisionStandings, display: &DisplayConfig) -> Vec<String> {
    let mut lines = Vec::new();
    let header = format_header(&division.division_name, true, display);
    lines.extend(header.lines().map(|s| s.to_string()));
    lines.push(String::new()); // Empty line between header and table

    let table = format_standings_table(&division.teams, display);
    lines.extend(table.lines().map(|s| s.to_string()));

    lines
}

fn merge_columns(left_lines: Vec<String>, right_lines: Vec<String>, column_width: usize) -> String {
    let mut output = String::new();
    let max_len = left_lines.len().max(right_lines.len());

    for i in 0..max_len {
        let left = left_lines.get(i).map(|s| s.as_str()).unwrap_or("");
        let right = right_lines.get(i).map(|s| s.as_str()).unwrap_or("");

        // Pad left column to column_width with spacing between columns
        let line = format!(
            "{:<width$}{}{}",
            left,
            " ".repeat(COLUMN_SPACING),
            right,
            width = column_width
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

/// Divisions two per row, in the order the view lists them
pub fn format_standings(view: &StandingsView, display: &DisplayConfig) -> String {
    if view.is_empty() {
        return "No standings available.\n".to_string();
    }

    let mut output = String::new();
    for pair in view.divisions.chunks(2) {
        output.push('\n');
        let left = format_division_with_header(&pair[0], display);
        let right = pair
            .get(1)
            .map(|division| format_division_with_header(division, display))
            .unwrap_or_default();
        output.push_str(&merge_columns(left, right, STANDINGS_COLUMN_WIDTH));
    }
    output
}

pub async fn run(client: &dyn DataProvider, config: &Config) -> Result<()> {
    let view = fetch_standings_view(client)
        .await
        .context("Failed to fetch current standings")?;

    print!("{}", format_standings(&view, &config.display));

    Ok(())
}
