use sqlx::PgPool;
use storage::{
    dto::standings::{ChampionshipSnapshot, Standing},
    error::Result,
    models::{Capability, Championship},
    repository::{
        championship::ChampionshipRepository, driver::DriverRepository, race::RaceRepository,
        race_result::RaceResultRepository,
    },
    services::{
        snapshot::build_snapshot,
        standings::{compute_standings, resolve_latest},
    },
};

/// Ranked standings of a championship
pub async fn get_standings(pool: &PgPool, championship_slug: &str) -> Result<Vec<Standing>> {
    let championship = ChampionshipRepository::new(pool)
        .find_by_slug(championship_slug)
        .await?;

    let drivers = DriverRepository::new(pool)
        .list_for_championship(championship.championship_id)
        .await?;
    let results = RaceResultRepository::new(pool)
        .list_for_championship(championship.championship_id)
        .await?;

    let latest = resolve_latest(&results);
    Ok(compute_standings(drivers, &latest))
}

/// Standings and race grid of a championship, looked up by slug
pub async fn get_snapshot(
    pool: &PgPool,
    championship_slug: &str,
    capability: Capability,
) -> Result<ChampionshipSnapshot> {
    let championship = ChampionshipRepository::new(pool)
        .find_by_slug(championship_slug)
        .await?;

    load_snapshot(pool, championship, capability).await
}

/// Fetch every row of the championship and run the scoring pipeline
pub async fn load_snapshot(
    pool: &PgPool,
    championship: Championship,
    capability: Capability,
) -> Result<ChampionshipSnapshot> {
    let drivers = DriverRepository::new(pool)
        .list_for_championship(championship.championship_id)
        .await?;
    let races = RaceRepository::new(pool)
        .list_for_championship(championship.championship_id)
        .await?;
    let results = RaceResultRepository::new(pool)
        .list_for_championship(championship.championship_id)
        .await?;

    Ok(build_snapshot(championship, drivers, races, &results, capability))
}
