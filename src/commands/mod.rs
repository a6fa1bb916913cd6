pub mod game;
pub mod score_table;
pub mod scores;
pub mod season;
pub mod standings;
pub mod team;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, Utc};

/// Parse optional date string, defaulting to today
///
/// Accepts dates in YYYY-MM-DD format. If no date is provided, returns today's local date.
/// Returns an error if the date string is malformed.
pub fn parse_game_date(date: Option<String>) -> Result<NaiveDate> {
    if let Some(date_str) = date {
        let parsed_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .with_context(|| format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str))?;
        Ok(parsed_date)
    } else {
        Ok(Local::now().date_naive())
    }
}

/// Render a UTC start time in local time, or "TBD" when unknown
pub fn format_start_time(start_time_utc: Option<DateTime<Utc>>, time_format: &str) -> String {
    match start_time_utc {
        Some(utc) => utc.with_timezone(&Local).format(time_format).to_string(),
        None => "TBD".to_string(),
    }
}
