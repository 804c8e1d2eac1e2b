use uuid::Uuid;

use crate::models::{Driver, RaceResult, RoundResult, ScoreSheet};

use super::standings::resolve_latest;

/// Default result to insert for one driver when a race is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRow {
    pub driver_id: Uuid,
    pub sheet: ScoreSheet,
}

/// Zero-delta sheet carrying over the prior result's after values, or all
/// zeroes when the driver has no prior result.
pub fn seed_sheet(prior: Option<&RaceResult>) -> ScoreSheet {
    match prior {
        Some(prior) => {
            let carried = prior.sheet();
            ScoreSheet::unchanged(carried.cp_after, carried.pi_after, carried.penalty_for_next)
        }
        None => ScoreSheet::default(),
    }
}

/// Seed rows for every active driver entering round `round_number`.
///
/// Only results of earlier rounds are considered as the prior state.
pub fn plan_seeds(drivers: &[Driver], results: &[RoundResult], round_number: i32) -> Vec<SeedRow> {
    let prior = resolve_latest(results.iter().filter(|row| row.round_number < round_number));

    drivers
        .iter()
        .filter(|driver| driver.is_active)
        .map(|driver| SeedRow {
            driver_id: driver.driver_id,
            sheet: seed_sheet(prior.get(&driver.driver_id).map(|row| &row.result)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::standings::tests::{driver, row};

    #[test]
    fn seeding_copies_prior_after_values() {
        let d = driver("Carried");
        let results = vec![row(d.driver_id, 1, 100, 50, 5)];

        let seeds = plan_seeds(&[d.clone()], &results, 2);

        assert_eq!(
            seeds,
            vec![SeedRow {
                driver_id: d.driver_id,
                sheet: ScoreSheet {
                    cp_before: 100,
                    pi_before: 50,
                    penalty_before: 5,
                    cp_after: 100,
                    pi_after: 50,
                    penalty_for_next: 5,
                },
            }]
        );
    }

    #[test]
    fn seeding_without_prior_is_all_zero() {
        let d = driver("Rookie");

        let seeds = plan_seeds(&[d], &[], 1);

        assert_eq!(seeds[0].sheet, ScoreSheet::default());
    }

    #[test]
    fn seeding_ignores_later_rounds() {
        let d = driver("Backfill");
        let results = vec![row(d.driver_id, 1, 10, 1, 0), row(d.driver_id, 5, 99, 9, 9)];

        let seeds = plan_seeds(&[d], &results, 3);

        assert_eq!(seeds[0].sheet, ScoreSheet::unchanged(10, 1, 0));
    }

    #[test]
    fn seeding_uses_highest_prior_round_regardless_of_order() {
        let d = driver("Shuffled");
        let results = vec![row(d.driver_id, 2, 80, 40, 4), row(d.driver_id, 1, 10, 1, 0)];

        let seeds = plan_seeds(&[d], &results, 3);

        assert_eq!(seeds[0].sheet, ScoreSheet::unchanged(80, 40, 4));
    }

    #[test]
    fn seeding_skips_inactive_drivers() {
        let active = driver("Active");
        let mut retired = driver("Retired");
        retired.is_active = false;

        let seeds = plan_seeds(&[active.clone(), retired], &[], 1);

        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].driver_id, active.driver_id);
    }

    #[test]
    fn seed_sheet_falls_back_to_before_when_after_missing() {
        let mut prior = row(Uuid::new_v4(), 1, 0, 0, 0).result;
        prior.cp_before = 70;
        prior.cp_after = None;

        assert_eq!(seed_sheet(Some(&prior)).cp_before, 70);
        assert_eq!(seed_sheet(Some(&prior)).cp_after, 70);
    }
}
