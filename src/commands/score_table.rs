use crate::config::DisplayConfig;
use crate::formatting::format_border;
use crate::model::PeriodScore;
use crate::summary::{period_label, total_goals};

// Layout Constants
/// Width of team abbreviation column in score table
const TEAM_ABBREV_COL_WIDTH: usize = 5;

/// Width of each period column in score table
const PERIOD_COL_WIDTH: usize = 4;

/// Period-by-period score box: one column per listed period plus a total.
///
/// Away team on the first row, home team on the second, the same order as
/// the matchup line above it.
pub fn format_score_table(
    away_abbrev: &str,
    home_abbrev: &str,
    scores: &[PeriodScore],
    display: &DisplayConfig,
) -> String {
    let chars = &display.box_chars;
    let (home_total, away_total) = total_goals(scores);

    let mut widths = vec![TEAM_ABBREV_COL_WIDTH];
    widths.extend(std::iter::repeat(PERIOD_COL_WIDTH).take(scores.len() + 1));

    let mut header = vec![format!("{:^w$}", "", w = TEAM_ABBREV_COL_WIDTH)];
    header.extend(
        scores
            .iter()
            .map(|s| format!("{:^w$}", period_label(s.period), w = PERIOD_COL_WIDTH)),
    );
    header.push(format!("{:^w$}", "T", w = PERIOD_COL_WIDTH));

    let team_row = |abbrev: &str, goals: Vec<u32>, total: u32| {
        let mut cells = vec![format!("{:^w$}", abbrev, w = TEAM_ABBREV_COL_WIDTH)];
        cells.extend(
            goals
                .iter()
                .map(|g| format!("{:^w$}", g, w = PERIOD_COL_WIDTH)),
        );
        cells.push(format!("{:^w$}", total, w = PERIOD_COL_WIDTH));
        cells
    };
    let away = team_row(away_abbrev, scores.iter().map(|s| s.away).collect(), away_total);
    let home = team_row(home_abbrev, scores.iter().map(|s| s.home).collect(), home_total);

    let row = |cells: &[String]| {
        format!(
            "{}{}{}",
            chars.vertical,
            cells.join(chars.vertical.as_str()),
            chars.vertical
        )
    };

    let mut output = String::new();
    output.push_str(&format_border(&widths, &chars.top_left, &chars.top_junction, &chars.top_right, display));
    output.push('\n');
    output.push_str(&row(&header));
    output.push('\n');
    output.push_str(&format_border(&widths, &chars.left_junction, &chars.cross, &chars.right_junction, display));
    output.push('\n');
    output.push_str(&row(&away));
    output.push('\n');
    output.push_str(&row(&home));
    output.push('\n');
    output.push_str(&format_border(&widths, &chars.bottom_left, &chars.bottom_junction, &chars.bottom_right, display));
    output.push('\n');
    output
}
