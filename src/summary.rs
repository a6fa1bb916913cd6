/// Score/Boxscore Summarizer
use crate::model::{GameDetail, GameState, PeriodScore, ScoringPlay};

/// Period number for overtime in a regular-season game
const OVERTIME_PERIOD_NUM: u32 = 4;

/// Period number for the shootout in a regular-season game
const SHOOTOUT_PERIOD_NUM: u32 = 5;

/// Map a game-state code to a display label; unknown codes pass through
pub fn status_label(code: &str) -> String {
    GameState::from_code(code).label().to_string()
}

/// Short period name: "1st", "2nd", "3rd", "OT", "SO"
pub fn period_label(period: u32) -> String {
    match period {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        OVERTIME_PERIOD_NUM => "OT".to_string(),
        n if n >= SHOOTOUT_PERIOD_NUM => "SO".to_string(),
        n => format!("P{}", n),
    }
}

/// Every goal in the game, period by period, in upstream order within a period
pub fn scoring_plays(game: &GameDetail) -> Vec<ScoringPlay> {
    game.scoring
        .iter()
        .flatten()
        .flat_map(|period| {
            period.goals.iter().map(move |goal| ScoringPlay {
                period: period.number,
                time: goal.time_in_period.clone(),
                player: goal.scorer.clone(),
                team: goal.team_abbrev.clone(),
            })
        })
        .collect()
}

/// Home/away goal counts per period.
///
/// One entry per period listed in the scoring summary (periods without goals
/// count zero). A goal credited to neither team is not counted.
pub fn period_scores(game: &GameDetail) -> Vec<PeriodScore> {
    let home = &game.summary.home.abbrev;
    let away = &game.summary.away.abbrev;
    let plays = scoring_plays(game);

    let mut scores: Vec<PeriodScore> = Vec::new();
    for period in game.scoring.iter().flatten() {
        if scores.iter().any(|s| s.period == period.number) {
            continue;
        }
        scores.push(PeriodScore {
            period: period.number,
            home: 0,
            away: 0,
        });
    }

    for play in &plays {
        if play.team.is_empty() {
            continue;
        }
        let Some(entry) = scores.iter_mut().find(|s| s.period == play.period) else {
            continue;
        };
        if &play.team == home {
            entry.home += 1;
        } else if &play.team == away {
            entry.away += 1;
        }
    }

    scores
}

/// Summed (home, away) goals across all periods
pub fn total_goals(scores: &[PeriodScore]) -> (u32, u32) {
    scores
        .iter()
        .fold((0, 0), |(home, away), s| (home + s.home, away + s.away))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GameSummary, GameTeam, Goal, ScoringPeriod};

    fn goal(team: &str, time: &str, scorer: &str) -> Goal {
        Goal {
            time_in_period: time.to_string(),
            scorer: scorer.to_string(),
            team_abbrev: team.to_string(),
        }
    }

    fn game(home: &str, away: &str, scoring: Option<Vec<ScoringPeriod>>) -> GameDetail {
        GameDetail {
            summary: GameSummary {
                id: 2024020500,
                away: GameTeam {
                    abbrev: away.to_string(),
                    ..Default::default()
                },
                home: GameTeam {
                    abbrev: home.to_string(),
                    ..Default::default()
                },
                state: GameState::Final,
                start_time_utc: None,
            },
            scoring,
        }
    }

    fn bos_tor_game() -> GameDetail {
        game(
            "BOS",
            "TOR",
            Some(vec![
                ScoringPeriod {
                    number: 1,
                    goals: vec![goal("BOS", "05:12", "David Pastrnak")],
                },
                ScoringPeriod {
                    number: 2,
                    goals: vec![
                        goal("TOR", "01:01", "Auston Matthews"),
                        goal("BOS", "18:40", "Brad Marchand"),
                    ],
                },
            ]),
        )
    }

    #[test]
    fn test_status_label_mapping() {
        assert_eq!(status_label("LIVE"), "Live");
        assert_eq!(status_label("CRIT"), "Live");
        assert_eq!(status_label("FUT"), "Scheduled");
        assert_eq!(status_label("PRE"), "Scheduled");
        assert_eq!(status_label("FINAL"), "Final");
        assert_eq!(status_label("OFF"), "Final");
        assert_eq!(status_label("XYZ"), "XYZ");
        assert_eq!(status_label(""), "");
    }

    #[test]
    fn test_period_label() {
        assert_eq!(period_label(1), "1st");
        assert_eq!(period_label(2), "2nd");
        assert_eq!(period_label(3), "3rd");
        assert_eq!(period_label(4), "OT");
        assert_eq!(period_label(5), "SO");
        assert_eq!(period_label(0), "P0");
    }

    #[test]
    fn test_scoring_plays_flatten_in_order() {
        let plays = scoring_plays(&bos_tor_game());
        let summary: Vec<(u32, &str, &str)> = plays
            .iter()
            .map(|p| (p.period, p.time.as_str(), p.team.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![(1, "05:12", "BOS"), (2, "01:01", "TOR"), (2, "18:40", "BOS")]
        );
        assert_eq!(plays[0].player, "David Pastrnak");
    }

    #[test]
    fn test_scoring_plays_keep_upstream_order_within_period() {
        let detail = game(
            "BOS",
            "TOR",
            Some(vec![ScoringPeriod {
                number: 3,
                goals: vec![goal("BOS", "19:00", "Late"), goal("TOR", "02:00", "Early")],
            }]),
        );
        let plays = scoring_plays(&detail);
        assert_eq!(plays[0].player, "Late");
        assert_eq!(plays[1].player, "Early");
    }

    #[test]
    fn test_no_scoring_summary_is_empty() {
        let detail = game("BOS", "TOR", None);
        assert!(scoring_plays(&detail).is_empty());
        assert!(period_scores(&detail).is_empty());
    }

    #[test]
    fn test_period_scores_scenario() {
        let scores = period_scores(&bos_tor_game());
        assert_eq!(
            scores,
            vec![
                PeriodScore { period: 1, home: 1, away: 0 },
                PeriodScore { period: 2, home: 1, away: 1 },
            ]
        );
    }

    #[test]
    fn test_period_without_goals_counts_zero() {
        let detail = game(
            "BOS",
            "TOR",
            Some(vec![
                ScoringPeriod { number: 1, goals: vec![] },
                ScoringPeriod {
                    number: 2,
                    goals: vec![goal("TOR", "10:00", "Mitch Marner")],
                },
            ]),
        );
        assert_eq!(
            period_scores(&detail),
            vec![
                PeriodScore { period: 1, home: 0, away: 0 },
                PeriodScore { period: 2, home: 0, away: 1 },
            ]
        );
    }

    #[test]
    fn test_unknown_team_goal_is_uncounted() {
        let detail = game(
            "BOS",
            "TOR",
            Some(vec![ScoringPeriod {
                number: 1,
                goals: vec![goal("BOS", "01:00", "A"), goal("MTL", "02:00", "B")],
            }]),
        );
        assert_eq!(scoring_plays(&detail).len(), 2);
        assert_eq!(
            period_scores(&detail),
            vec![PeriodScore { period: 1, home: 1, away: 0 }]
        );
    }

    #[test]
    fn test_goal_without_team_not_credited_to_side_without_abbrev() {
        let detail = game(
            "",
            "TOR",
            Some(vec![ScoringPeriod {
                number: 1,
                goals: vec![goal("", "04:30", "Unknown")],
            }]),
        );
        assert_eq!(scoring_plays(&detail).len(), 1);
        assert_eq!(
            period_scores(&detail),
            vec![PeriodScore { period: 1, home: 0, away: 0 }]
        );
    }

    #[test]
    fn test_goal_without_team_from_landing_is_uncounted() {
        let raw: crate::api::wire::GameLandingResponse = serde_json::from_value(serde_json::json!({
            "id": 2024020777u64,
            "gameState": "FINAL",
            "homeTeam": {"score": 1},
            "awayTeam": {"abbrev": "TOR", "score": 0},
            "summary": {
                "scoring": [
                    {"periodDescriptor": {"number": 1}, "goals": [{"timeInPeriod": "07:07"}]}
                ]
            }
        }))
        .unwrap();
        let detail = crate::adapter::adapt_game_detail(&raw).unwrap();
        assert_eq!(
            period_scores(&detail),
            vec![PeriodScore { period: 1, home: 0, away: 0 }]
        );
    }

    #[test]
    fn test_repeated_period_number_is_listed_once() {
        let detail = game(
            "BOS",
            "TOR",
            Some(vec![
                ScoringPeriod {
                    number: 1,
                    goals: vec![goal("BOS", "03:00", "David Pastrnak")],
                },
                ScoringPeriod {
                    number: 1,
                    goals: vec![goal("TOR", "09:00", "William Nylander")],
                },
            ]),
        );
        assert_eq!(
            period_scores(&detail),
            vec![PeriodScore { period: 1, home: 1, away: 1 }]
        );
    }

    #[test]
    fn test_period_totals_match_plays_split_by_team() {
        let detail = bos_tor_game();
        let plays = scoring_plays(&detail);
        let (home, away) = total_goals(&period_scores(&detail));
        assert_eq!(home as usize, plays.iter().filter(|p| p.team == "BOS").count());
        assert_eq!(away as usize, plays.iter().filter(|p| p.team == "TOR").count());
    }
}
