use std::collections::HashMap;

use uuid::Uuid;

use crate::dto::standings::Standing;
use crate::models::{Driver, RoundResult};

/// Pick the current result of every driver: the row of the highest round.
///
/// Rows sharing a round number resolve to the one seen last.
pub fn resolve_latest<'a, I>(results: I) -> HashMap<Uuid, &'a RoundResult>
where
    I: IntoIterator<Item = &'a RoundResult>,
{
    let mut latest: HashMap<Uuid, &'a RoundResult> = HashMap::new();

    for row in results {
        match latest.get(&row.result.driver_id) {
            Some(current) if current.round_number > row.round_number => {}
            _ => {
                latest.insert(row.result.driver_id, row);
            }
        }
    }

    latest
}

/// Score and rank drivers from their current results.
///
/// Drivers are ordered by `current_cp` descending; equal scores keep the
/// order they were passed in. Places run 1..=N.
///
/// A latest row with a missing after value scores its before value, the same
/// zero-delta reading the race grid uses, rather than 0.
pub fn compute_standings(
    drivers: Vec<Driver>,
    latest: &HashMap<Uuid, &RoundResult>,
) -> Vec<Standing> {
    let mut standings: Vec<Standing> = drivers
        .into_iter()
        .map(|driver| {
            let (current_cp, current_pi, current_penalty) = latest
                .get(&driver.driver_id)
                .map(|row| {
                    let sheet = row.result.sheet();
                    (sheet.cp_after, sheet.pi_after, sheet.penalty_for_next)
                })
                .unwrap_or((0, 0, 0));

            Standing {
                place: 0,
                driver,
                current_cp,
                current_pi,
                current_penalty,
                effective_pi: current_pi.saturating_sub(current_penalty).max(0),
            }
        })
        .collect();

    standings.sort_by(|a, b| b.current_cp.cmp(&a.current_cp));

    for (index, standing) in standings.iter_mut().enumerate() {
        standing.place = index as u32 + 1;
    }

    standings
}
