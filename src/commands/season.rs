use crate::commands::parse_game_date;
use crate::season::{current_season, SeasonId};
use anyhow::Result;

pub fn format_season(season: &SeasonId) -> String {
    format!(
        "{} ({}-{} season)\n",
        season,
        season.start_year(),
        season.end_year()
    )
}

pub fn run(date: Option<String>) -> Result<()> {
    let date = parse_game_date(date)?;
    print!("{}", format_season(&current_season(&date)));
    Ok(())
}
