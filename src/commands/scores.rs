use crate::commands::score_table::format_score_table;
use crate::commands::{format_start_time, parse_game_date};
use crate::config::Config;
use crate::data_provider::DataProvider;
use crate::fetch::fetch_scoreboard_view;
use crate::formatting::format_header;
use crate::view::{GameCard, ScoreboardView};
use anyhow::{Context, Result};

/// Score or a dash for games that have not started
fn format_score(score: Option<u32>) -> String {
    score.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Status column: start time for scheduled games, the status label otherwise
fn format_card_status(card: &GameCard, time_format: &str) -> String {
    if card.game.state.has_started() {
        card.status.clone()
    } else {
        format!("{} {}", card.status, format_start_time(card.game.start_time_utc, time_format))
    }
}

pub fn format_game_card(card: &GameCard, config: &Config) -> String {
    let game = &card.game;
    let mut output = format!(
        "{:<4} {:>2}  @  {:<4} {:>2}   {}\n",
        game.away.abbrev,
        format_score(game.away.score),
        game.home.abbrev,
        format_score(game.home.score),
        format_card_status(card, &config.time_format)
    );

    if let Some(scores) = &card.period_scores {
        output.push_str(&format_score_table(
            &game.away.abbrev,
            &game.home.abbrev,
            scores,
            &config.display,
        ));
    }
    if let Some((away, home)) = card.shots_on_goal {
        output.push_str(&format!("SOG {} {}, {} {}\n", game.away.abbrev, away, game.home.abbrev, home));
    }

    output
}

pub fn format_scoreboard(view: &ScoreboardView, config: &Config) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header(&format!("NHL Scores - {}", view.date), true, &config.display));
    output.push('\n');

    if view.cards.is_empty() {
        output.push_str("No games scheduled for this date.\n");
        return output;
    }

    for (i, card) in view.cards.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format_game_card(card, config));
    }

    output
}

pub async fn run(client: &dyn DataProvider, date: Option<String>, config: &Config) -> Result<()> {
    let game_date = parse_game_date(date)?;
    let date_str = game_date.format("%Y-%m-%d").to_string();

    let view = fetch_scoreboard_view(client, &date_str)
        .await
        .with_context(|| format!("Failed to fetch scores for {}", date_str))?;

    print!("{}", format_scoreboard(&view, config));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::MockClient;
    use crate::fixtures;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Some(3)), "3");
        assert_eq!(format_score(None), "-");
    }

    #[test]
    fn test_format_scoreboard_empty_day() {
        let view = ScoreboardView {
            date: "2024-11-21".to_string(),
            cards: Vec::new(),
        };
        let output = format_scoreboard(&view, &Config::default());
        assert!(output.contains("NHL Scores - 2024-11-21"));
        assert!(output.ends_with("No games scheduled for this date.\n"));
    }

    #[tokio::test]
    async fn test_format_scoreboard_from_fixtures() {
        let client = MockClient::new();
        let view = fetch_scoreboard_view(&client, fixtures::SCOREBOARD_DATE)
            .await
            .unwrap();
        let output = format_scoreboard(&view, &Config::default());

        assert!(output.contains("MTL   -  @  BOS   -   Scheduled"));
        assert!(output.contains("TOR   2  @  OTT   1   Live"));
        assert!(output.contains("NYR   2  @  NJD   3   Final"));
        assert!(output.contains("SOG NYR 30, NJD 33"));
    }

    #[tokio::test]
    async fn test_format_scoreboard_without_detail_has_no_table() {
        let client = MockClient::new().with_failing_game(fixtures::LIVE_GAME_ID);
        let view = fetch_scoreboard_view(&client, fixtures::SCOREBOARD_DATE)
            .await
            .unwrap();
        let live_card = format_game_card(&view.cards[1], &Config::default());
        assert_eq!(live_card.lines().count(), 1);
    }
}
