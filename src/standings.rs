/// Standings Aggregator
use crate::model::{DivisionStandings, RankedTeam, TeamRecord};
use std::collections::HashMap;

/// Round to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Half the point gap to the division leader, rounded to one decimal
pub fn games_behind(leader_points: u32, points: u32) -> f64 {
    round1((leader_points as f64 - points as f64) / 2.0)
}

/// Group teams by division and rank each division by points.
///
/// Divisions come out in the order they are first seen in the input. Within a
/// division, teams are sorted by points descending; ties keep input order.
pub fn aggregate_standings(teams: Vec<TeamRecord>) -> Vec<DivisionStandings> {
    let mut order: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<TeamRecord>)> = Vec::new();

    for team in teams {
        match order.get(&team.division_name) {
            Some(&idx) => groups[idx].1.push(team),
            None => {
                order.insert(team.division_name.clone(), groups.len());
                groups.push((team.division_name.clone(), vec![team]));
            }
        }
    }

    groups
        .into_iter()
        .map(|(division_name, mut members)| {
            members.sort_by(|a, b| b.points.cmp(&a.points));
            let leader_points = members.first().map(|t| t.points).unwrap_or_default();
            let teams = members
                .into_iter()
                .map(|record| RankedTeam {
                    games_behind: games_behind(leader_points, record.points),
                    record,
                })
                .collect();
            DivisionStandings {
                division_name,
                teams,
            }
        })
        .collect()
}
