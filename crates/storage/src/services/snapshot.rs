use crate::dto::standings::{ChampionshipSnapshot, RaceColumn};
use crate::models::{Capability, Championship, Driver, Race, RoundResult};

use super::grid::build_grid;
use super::standings::{compute_standings, resolve_latest};

/// Run the whole pipeline (resolve, rank, grid) over freshly fetched rows
pub fn build_snapshot(
    championship: Championship,
    drivers: Vec<Driver>,
    mut races: Vec<Race>,
    results: &[RoundResult],
    capability: Capability,
) -> ChampionshipSnapshot {
    races.sort_by_key(|race| race.round_number);

    let latest = resolve_latest(results);
    let standings = compute_standings(drivers, &latest);
    let grid = build_grid(&standings, &races, results, capability);

    tracing::debug!(
        championship = %championship.slug,
        drivers = standings.len(),
        races = races.len(),
        results = results.len(),
        "Built championship snapshot"
    );

    ChampionshipSnapshot {
        championship,
        capability,
        standings,
        races: races.iter().map(RaceColumn::from).collect(),
        grid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::standings::tests::{driver, row};
    use chrono::NaiveDateTime;
    use uuid::Uuid;

    fn championship() -> Championship {
        Championship {
            championship_id: Uuid::new_v4(),
            name: "Club Cup".to_string(),
            slug: "club-cup".to_string(),
            season: Some(2025),
            created_at: NaiveDateTime::default(),
        }
    }

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

    #[test]
    fn snapshot_orders_races_and_ranks_drivers() {
        let a = driver("A");
        let b = driver("B");
        let round_two = race(2);
        let round_one = race(1);

        let mut a_second = row(a.driver_id, 2, 40, 10, 0);
        a_second.result.race_id = round_two.race_id;
        let mut b_first = row(b.driver_id, 1, 60, 10, 0);
        b_first.result.race_id = round_one.race_id;
        let results = vec![a_second, b_first];

        let snapshot = build_snapshot(
            championship(),
            vec![a.clone(), b.clone()],
            vec![round_two, round_one],
            &results,
            Capability::Viewer,
        );

        let rounds: Vec<i32> = snapshot.races.iter().map(|r| r.round_number).collect();
        assert_eq!(rounds, vec![1, 2]);
        assert_eq!(snapshot.races[0].name, "Race 1");
        assert_eq!(snapshot.standings[0].driver.driver_id, b.driver_id);
        assert_eq!(snapshot.grid[0].driver_id, b.driver_id);
        assert!(snapshot.grid[0].cells[0].is_some());
        assert!(snapshot.grid[0].cells[1].is_none());
        assert!(snapshot.grid[1].cells[0].is_none());
        assert!(snapshot.grid[1].cells[1].is_some());
    }

    #[test]
    fn viewer_snapshot_serializes_empty_cells_as_null() {
        let d = driver("Only");
        let r = race(1);

        let snapshot = build_snapshot(championship(), vec![d], vec![r], &[], Capability::Viewer);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["capability"], "viewer");
        assert!(json["grid"][0]["cells"][0].is_null());
        assert_eq!(json["standings"][0]["place"], 1);
    }

    #[test]
    fn extreme_scores_saturate_through_the_pipeline() {
        let d = driver("Extreme");
        let r = race(1);
        let mut extreme = row(d.driver_id, 1, i32::MAX, i32::MIN, 1);
        extreme.result.race_id = r.race_id;
        extreme.result.cp_before = -1;

        let snapshot = build_snapshot(championship(), vec![d], vec![r], &[extreme], Capability::Viewer);

        assert_eq!(snapshot.standings[0].effective_pi, 0);
        let cell = snapshot.grid[0].cells[0].as_ref().unwrap();
        assert_eq!(cell.delta_cp, i32::MAX);
    }
}
