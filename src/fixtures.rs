/// Mock fixture data for testing and development
///
/// Deterministic upstream JSON payloads shaped like the real API responses.
/// Used by unit tests, the development `MockClient`, and benchmarks.
use serde_json::{json, Value};

/// Date that the scoreboard fixture has games for
pub const SCOREBOARD_DATE: &str = "2024-11-20";

/// Completed TOR @ BOS game with a full scoring summary
pub const FINAL_GAME_ID: u64 = 2024020500;

pub const SCHEDULED_GAME_ID: u64 = 2024020001;
pub const LIVE_GAME_ID: u64 = 2024020002;

/// Ordered league-wide by points, the way the upstream returns it
pub const STANDINGS_JSON: &str = r#"{
  "standings": [
    {"teamName":{"default":"New Jersey Devils"},"teamAbbrev":{"default":"NJD"},"divisionName":"Metropolitan","wins":15,"losses":2,"otLosses":1,"points":31,"teamLogo":"https://assets.nhle.com/logos/nhl/svg/NJD_light.svg"},
    {"teamName":{"default":"Florida Panthers"},"teamAbbrev":{"default":"FLA"},"divisionName":"Atlantic","wins":14,"losses":3,"otLosses":2,"points":30,"teamLogo":"https://assets.nhle.com/logos/nhl/svg/FLA_light.svg"},
    {"teamName":{"default":"Carolina Hurricanes"},"teamAbbrev":{"default":"CAR"},"divisionName":"Metropolitan","wins":14,"losses":3,"otLosses":2,"points":30,"teamLogo":"https://assets.nhle.com/logos/nhl/svg/CAR_light.svg"},
    {"teamName":{"default":"Boston Bruins"},"teamAbbrev":{"default":"BOS"},"divisionName":"Atlantic","wins":13,"losses":4,"otLosses":1,"points":27,"teamLogo":"https://assets.nhle.com/logos/nhl/svg/BOS_light.svg"},
    {"teamName":{"default":"Toronto Maple Leafs"},"teamAbbrev":{"default":"TOR"},"divisionName":"Atlantic","wins":12,"losses":5,"otLosses":2,"points":26,"teamLogo":"https://assets.nhle.com/logos/nhl/svg/TOR_light.svg"},
    {"teamName":{"default":"New York Rangers"},"teamAbbrev":{"default":"NYR"},"divisionName":"Metropolitan","wins":12,"losses":5,"otLosses":1,"points":25,"teamLogo":"https://assets.nhle.com/logos/nhl/svg/NYR_light.svg"},
    {"teamName":{"default":"Ottawa Senators"},"teamAbbrev":{"default":"OTT"},"divisionName":"Atlantic","wins":9,"losses":7,"otLosses":2,"points":20},
    {"teamName":{"default":"Philadelphia Flyers"},"divisionName":"Metropolitan","wins":7,"losses":10,"otLosses":1,"points":15,"teamLogo":"https://assets.nhle.com/logos/nhl/svg/PHI_light.svg"}
  ]
}"#;

pub const CLUB_SCHEDULE_JSON: &str = r#"{
  "games": [
    {"id":2024020003,"gameDate":"2024-10-08","awayTeam":{"abbrev":"BOS"},"homeTeam":{"abbrev":"FLA"}},
    {"id":2024020020,"gameDate":"2024-10-10","awayTeam":{"abbrev":"BOS"},"homeTeam":{"abbrev":"MTL"}},
    {"id":2024020033,"gameDate":"2024-10-12","awayTeam":{"abbrev":"LAK"},"homeTeam":{"abbrev":"BOS"}}
  ]
}"#;

pub const SCOREBOARD_JSON: &str = r#"{
  "gamesByDate": [
    {"date":"2024-11-19","games":[
      {"id":2024019999,"gameState":"OFF","startTimeUTC":"2024-11-20T00:00:00Z",
       "awayTeam":{"abbrev":"CHI","score":1},"homeTeam":{"abbrev":"SEA","score":4}}
    ]},
    {"date":"2024-11-20","games":[
      {"id":2024020001,"gameState":"FUT","startTimeUTC":"2024-11-21T00:00:00Z",
       "awayTeam":{"abbrev":"MTL","logo":"https://assets.nhle.com/logos/nhl/svg/MTL_light.svg"},
       "homeTeam":{"abbrev":"BOS","logo":"https://assets.nhle.com/logos/nhl/svg/BOS_light.svg"}},
      {"id":2024020002,"gameState":"LIVE","startTimeUTC":"2024-11-21T00:00:00Z",
       "awayTeam":{"abbrev":"TOR","score":2},"homeTeam":{"abbrev":"OTT","score":1}},
      {"id":2024020003,"gameState":"FINAL","startTimeUTC":"2024-11-20T23:00:00Z",
       "awayTeam":{"abbrev":"NYR","score":2},"homeTeam":{"abbrev":"NJD","score":3}},
      {"id":2024020004,"gameState":"OFF","startTimeUTC":"2024-11-21T03:00:00Z",
       "awayTeam":{"abbrev":"VGK","score":4},"homeTeam":{"abbrev":"LAK","score":2}}
    ]},
    {"date":"2024-11-21","games":[]}
  ]
}"#;

fn goal(time: &str, first: &str, last: &str, team: &str) -> Value {
    json!({
        "timeInPeriod": time,
        "firstName": {"default": first},
        "lastName": {"default": last},
        "teamAbbrev": {"default": team}
    })
}

fn period(number: u32, goals: Vec<Value>) -> Value {
    json!({"periodDescriptor": {"number": number}, "goals": goals})
}

fn landing(
    id: u64,
    state: &str,
    away: (&str, u32, u32),
    home: (&str, u32, u32),
    scoring: Option<Vec<Value>>,
) -> String {
    let mut value = json!({
        "id": id,
        "gameState": state,
        "startTimeUTC": "2024-11-21T00:00:00Z",
        "awayTeam": {"abbrev": away.0, "score": away.1, "sog": away.2,
                     "logo": format!("https://assets.nhle.com/logos/nhl/svg/{}_light.svg", away.0)},
        "homeTeam": {"abbrev": home.0, "score": home.1, "sog": home.2,
                     "logo": format!("https://assets.nhle.com/logos/nhl/svg/{}_light.svg", home.0)}
    });
    if let Some(scoring) = scoring {
        value["summary"] = json!({ "scoring": scoring });
    }
    value.to_string()
}

/// Game center landing payload for a fixture game id
pub fn game_landing_json(game_id: u64) -> String {
    match game_id {
        FINAL_GAME_ID => landing(
            game_id,
            "FINAL",
            ("TOR", 2, 28),
            ("BOS", 3, 31),
            Some(vec![
                period(1, vec![goal("05:12", "David", "Pastrnak", "BOS")]),
                period(
                    2,
                    vec![
                        goal("01:01", "Auston", "Matthews", "TOR"),
                        goal("18:40", "Brad", "Marchand", "BOS"),
                    ],
                ),
                period(
                    3,
                    vec![
                        goal("07:30", "William", "Nylander", "TOR"),
                        goal("19:02", "Pavel", "Zacha", "BOS"),
                    ],
                ),
            ]),
        ),
        LIVE_GAME_ID => landing(
            game_id,
            "LIVE",
            ("TOR", 2, 17),
            ("OTT", 1, 14),
            Some(vec![
                period(1, vec![goal("11:45", "Auston", "Matthews", "TOR")]),
                period(
                    2,
                    vec![
                        goal("03:20", "Brady", "Tkachuk", "OTT"),
                        goal("15:05", "Mitch", "Marner", "TOR"),
                    ],
                ),
            ]),
        ),
        2024020003 => landing(
            game_id,
            "FINAL",
            ("NYR", 2, 30),
            ("NJD", 3, 33),
            Some(vec![
                period(1, vec![goal("08:08", "Nico", "Hischier", "NJD")]),
                period(
                    2,
                    vec![
                        goal("02:14", "Artemi", "Panarin", "NYR"),
                        goal("16:59", "Jack", "Hughes", "NJD"),
                    ],
                ),
                period(
                    3,
                    vec![
                        goal("04:40", "Mika", "Zibanejad", "NYR"),
                        goal("12:12", "Jesper", "Bratt", "NJD"),
                    ],
                ),
            ]),
        ),
        2024020004 => landing(
            game_id,
            "OFF",
            ("VGK", 4, 35),
            ("LAK", 2, 26),
            Some(vec![
                period(
                    1,
                    vec![
                        goal("06:00", "Jack", "Eichel", "VGK"),
                        goal("09:31", "Anze", "Kopitar", "LAK"),
                    ],
                ),
                period(2, vec![goal("13:13", "Mark", "Stone", "VGK")]),
                period(
                    3,
                    vec![
                        goal("01:50", "Adrian", "Kempe", "LAK"),
                        goal("10:10", "Tomas", "Hertl", "VGK"),
                        goal("19:30", "Jack", "Eichel", "VGK"),
                    ],
                ),
            ]),
        ),
        _ => landing(game_id, "FUT", ("MTL", 0, 0), ("BOS", 0, 0), None),
    }
}

/// (id, sweater, first, last) for the BOS roster fixture
const BOS_FORWARDS: [(u64, u32, &str, &str); 3] = [
    (8473419, 63, "Brad", "Marchand"),
    (8477956, 88, "David", "Pastrnak"),
    (8478401, 18, "Pavel", "Zacha"),
];
const BOS_DEFENSEMEN: [(u64, u32, &str, &str); 2] = [
    (8479325, 73, "Charlie", "McAvoy"),
    (8480043, 27, "Hampus", "Lindholm"),
];
const BOS_GOALIES: [(u64, u32, &str, &str); 1] = [(8480280, 1, "Jeremy", "Swayman")];

fn roster_group(players: &[(u64, u32, &str, &str)]) -> Vec<Value> {
    players
        .iter()
        .map(|(id, sweater, first, last)| {
            json!({
                "id": id,
                "sweaterNumber": sweater,
                "firstName": {"default": first},
                "lastName": {"default": last}
            })
        })
        .collect()
}

pub fn roster_json() -> String {
    json!({
        "forwards": roster_group(&BOS_FORWARDS),
        "defensemen": roster_group(&BOS_DEFENSEMEN),
        "goalies": roster_group(&BOS_GOALIES)
    })
    .to_string()
}

/// Regular-season (goals, assists, points) for 20242025
fn season_line(player_id: u64) -> (u32, u32, u32) {
    match player_id {
        8477956 => (43, 63, 106),
        8473419 => (21, 26, 47),
        8478401 => (19, 27, 46),
        8479325 => (7, 16, 23),
        8480043 => (3, 12, 15),
        _ => (0, 0, 0),
    }
}

/// Player landing with a previous season, a playoff line and the current regular season
pub fn player_landing_json(player_id: u64) -> String {
    let mut everyone = BOS_FORWARDS
        .iter()
        .chain(BOS_DEFENSEMEN.iter())
        .chain(BOS_GOALIES.iter());
    let (first, last) = everyone
        .find(|(id, ..)| *id == player_id)
        .map(|(_, _, first, last)| (*first, *last))
        .unwrap_or(("Unknown", "Player"));
    let (goals, assists, points) = season_line(player_id);

    json!({
        "playerId": player_id,
        "firstName": {"default": first},
        "lastName": {"default": last},
        "seasonTotals": [
            {"season": 20232024, "gameTypeId": 2, "goals": 1, "assists": 1, "points": 2},
            {"season": 20242025, "gameTypeId": 3, "goals": 2, "assists": 2, "points": 4},
            {"season": 20242025, "gameTypeId": 2, "goals": goals, "assists": assists, "points": points}
        ]
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::wire::{
        GameLandingResponse, PlayerLandingResponse, RosterResponse, ScoreboardResponse,
        StandingsResponse,
    };

    #[test]
    fn test_fixtures_parse() {
        let standings: StandingsResponse = serde_json::from_str(STANDINGS_JSON).unwrap();
        assert_eq!(standings.standings.unwrap().len(), 8);

        let scoreboard: ScoreboardResponse = serde_json::from_str(SCOREBOARD_JSON).unwrap();
        assert_eq!(scoreboard.games_by_date.unwrap().len(), 3);

        let roster: RosterResponse = serde_json::from_str(&roster_json()).unwrap();
        assert_eq!(roster.forwards.unwrap().len(), 3);

        let landing: PlayerLandingResponse =
            serde_json::from_str(&player_landing_json(8477956)).unwrap();
        assert_eq!(landing.player_id, Some(8477956));

        for id in [FINAL_GAME_ID, LIVE_GAME_ID, SCHEDULED_GAME_ID, 2024020003, 2024020004] {
            let game: GameLandingResponse = serde_json::from_str(&game_landing_json(id)).unwrap();
            assert_eq!(game.id, Some(id));
        }
    }
}
