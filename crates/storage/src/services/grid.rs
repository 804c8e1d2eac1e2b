use std::collections::HashMap;

use uuid::Uuid;

use crate::dto::standings::{EditableCell, GridCell, GridRow, Standing};
use crate::models::{Capability, Race, RaceResult, RoundResult};

/// Build one row per ranked driver with one cell per race.
///
/// Cells without a stored result stay `None`. Admin callers additionally
/// get the raw fields and result id of every filled cell.
pub fn build_grid(
    standings: &[Standing],
    races: &[Race],
    results: &[RoundResult],
    capability: Capability,
) -> Vec<GridRow> {
    let by_pair: HashMap<(Uuid, Uuid), &RaceResult> = results
        .iter()
        .map(|row| ((row.result.driver_id, row.result.race_id), &row.result))
        .collect();

    standings
        .iter()
        .map(|standing| {
            let driver_id = standing.driver.driver_id;
            let cells = races
                .iter()
                .map(|race| {
                    by_pair
                        .get(&(driver_id, race.race_id))
                        .map(|result| grid_cell(result, capability))
                })
                .collect();

            GridRow {
                driver_id,
                driver_name: standing.driver.name.clone(),
                place: standing.place,
                cells,
            }
        })
        .collect()
}

fn grid_cell(result: &RaceResult, capability: Capability) -> GridCell {
    let sheet = result.sheet();

    GridCell {
        delta_cp: sheet.delta_cp(),
        delta_pi: sheet.delta_pi(),
        delta_penalty: sheet.delta_penalty(),
        editable: capability.is_admin().then(|| EditableCell {
            result_id: result.result_id,
            sheet,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::standings::tests::{driver, row};
    use crate::services::standings::{compute_standings, resolve_latest};
    use chrono::NaiveDateTime;

    fn race(round_number: i32) -> Race {
        Race {
            race_id: Uuid::new_v4(),
            championship_id: Uuid::nil(),
            round_number,
            name: None,
            race_date: None,
            created_at: NaiveDateTime::default(),
        }
    }

    fn result_in(race: &Race, driver_id: Uuid, cp_before: i32, cp_after: Option<i32>) -> RoundResult {
        let mut r = row(driver_id, race.round_number, 0, 0, 0);
        r.result.race_id = race.race_id;
        r.result.cp_before = cp_before;
        r.result.cp_after = cp_after;
        r.result.pi_after = None;
        r.result.penalty_for_next = None;
        r
    }

    #[test]
    fn cell_reports_deltas_and_empty_placeholders() {
        let d = driver("Solo");
        let first = race(1);
        let second = race(2);
        let results = vec![result_in(&first, d.driver_id, 100, Some(120))];
        let standings = compute_standings(vec![d.clone()], &resolve_latest(&results));

        let grid = build_grid(&standings, &[first, second], &results, Capability::Viewer);

        assert_eq!(grid.len(), 1);
        let cells = &grid[0].cells;
        let cell = cells[0].as_ref().unwrap();
        assert_eq!(cell.delta_cp, 20);
        assert_eq!(cell.delta_pi, 0);
        assert_eq!(cell.delta_penalty, 0);
        assert!(cell.editable.is_none());
        assert!(cells[1].is_none());
    }

    #[test]
    fn missing_after_values_give_zero_delta() {
        let d = driver("Unchanged");
        let r = race(1);
        let results = vec![result_in(&r, d.driver_id, 80, None)];
        let standings = compute_standings(vec![d], &resolve_latest(&results));

        let grid = build_grid(&standings, &[r], &results, Capability::Viewer);

        assert_eq!(grid[0].cells[0].as_ref().unwrap().delta_cp, 0);
    }

    #[test]
    fn admin_cells_expose_raw_fields() {
        let d = driver("Editable");
        let r = race(1);
        let results = vec![result_in(&r, d.driver_id, 100, Some(130))];
        let result_id = results[0].result.result_id;
        let standings = compute_standings(vec![d], &resolve_latest(&results));

        let grid = build_grid(&standings, &[r], &results, Capability::Admin);

        let editable = grid[0].cells[0].as_ref().unwrap().editable.as_ref().unwrap();
        assert_eq!(editable.result_id, result_id);
        assert_eq!(editable.sheet.cp_before, 100);
        assert_eq!(editable.sheet.cp_after, 130);
    }

    #[test]
    fn rows_follow_standings_order() {
        let slow = driver("Slow");
        let fast = driver("Fast");
        let r = race(1);
        let results = vec![
            result_in(&r, slow.driver_id, 0, Some(10)),
            result_in(&r, fast.driver_id, 0, Some(90)),
        ];
        let standings = compute_standings(vec![slow, fast.clone()], &resolve_latest(&results));

        let grid = build_grid(&standings, &[r], &results, Capability::Viewer);

        assert_eq!(grid[0].driver_id, fast.driver_id);
        assert_eq!(grid[0].place, 1);
        assert_eq!(grid[1].place, 2);
    }
}
