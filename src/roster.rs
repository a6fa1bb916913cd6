/// Roster/Top-Scorer Selector
use crate::model::{PlayerSeasonTotal, Roster};
use futures::future::join_all;
use std::fmt::Display;
use std::future::Future;
use tracing::{debug, warn};

/// Number of top scorers shown when the caller does not ask for a count
pub const DEFAULT_TOP_SCORER_LIMIT: usize = 3;

/// Rank already-resolved totals. Absent entries are dropped; ties keep input order.
pub fn rank_top_scorers(
    totals: impl IntoIterator<Item = Option<PlayerSeasonTotal>>,
    limit: usize,
) -> Vec<PlayerSeasonTotal> {
    if limit == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<PlayerSeasonTotal> = totals.into_iter().flatten().collect();
    ranked.sort_by(|a, b| b.points.cmp(&a.points));
    ranked.truncate(limit);
    ranked
}

/// Top point producers among the roster's skaters.
///
/// `fetch` is called once per skater (forwards then defensemen) and all calls
/// run concurrently. A skater whose fetch fails is left out of the ranking;
/// the rest of the roster is still ranked.
pub async fn top_scorers<F, Fut, E>(roster: &Roster, fetch: F, limit: usize) -> Vec<PlayerSeasonTotal>
where
    F: Fn(u64) -> Fut,
    Fut: Future<Output = Result<PlayerSeasonTotal, E>>,
    E: Display,
{
    if limit == 0 {
        return Vec::new();
    }

    let requests = roster.skaters().map(|player| {
        let id = player.id;
        let pending = fetch(id);
        async move {
            match pending.await {
                Ok(total) => Some(total),
                Err(e) => {
                    warn!("Skipping player {} in top scorers: {}", id, e);
                    None
                }
            }
        }
    });

    let results = join_all(requests).await;
    debug!(
        "Top scorers: {} of {} skaters resolved",
        results.iter().filter(|r| r.is_some()).count(),
        results.len()
    );
    rank_top_scorers(results, limit)
}
