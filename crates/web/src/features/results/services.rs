use sqlx::PgPool;
use storage::{
    dto::{race_result::CreateResultRequest, standings::ChampionshipSnapshot},
    error::Result,
    models::{Capability, Driver, Race, RaceResult, ScoreSheet},
    repository::{
        championship::ChampionshipRepository, driver::DriverRepository, race::RaceRepository,
        race_result::RaceResultRepository,
    },
};
use uuid::Uuid;

use crate::features::standings::services::load_snapshot;

/// Look up the driver and race a new result would link
pub async fn find_pair(pool: &PgPool, driver_id: Uuid, race_id: Uuid) -> Result<(Driver, Race)> {
    let driver = DriverRepository::new(pool).find_by_id(driver_id).await?;
    let race = RaceRepository::new(pool).find_by_id(race_id).await?;
    Ok((driver, race))
}

/// Record a result for a driver in a race
pub async fn create_result(pool: &PgPool, request: &CreateResultRequest) -> Result<RaceResult> {
    let repo = RaceResultRepository::new(pool);
    repo.create(request).await
}

/// Save all six fields of one result and recompute the championship.
///
/// Returns the saved row and a fresh snapshot reflecting the edit.
pub async fn save_result(
    pool: &PgPool,
    result_id: Uuid,
    sheet: &ScoreSheet,
    capability: Capability,
) -> Result<(RaceResult, ChampionshipSnapshot)> {
    let saved = RaceResultRepository::new(pool)
        .update_sheet(result_id, sheet)
        .await?;

    let race = RaceRepository::new(pool).find_by_id(saved.race_id).await?;
    let championship = ChampionshipRepository::new(pool)
        .find_by_id(race.championship_id)
        .await?;

    let snapshot = load_snapshot(pool, championship, capability).await?;

    tracing::info!(
        %result_id,
        championship = %snapshot.championship.slug,
        drivers = snapshot.standings.len(),
        "Result saved, standings recomputed"
    );

    Ok((saved, snapshot))
}

/// Delete one result
pub async fn delete_result(pool: &PgPool, result_id: Uuid) -> Result<()> {
    let repo = RaceResultRepository::new(pool);
    repo.delete(result_id).await
}
