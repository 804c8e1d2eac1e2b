use sqlx::PgPool;
use storage::{
    dto::race::{CreateRaceRequest, UpdateRaceRequest},
    error::Result,
    models::Race,
    repository::{
        championship::ChampionshipRepository, driver::DriverRepository, race::RaceRepository,
        race_result::RaceResultRepository,
    },
    services::seeding::plan_seeds,
};
use uuid::Uuid;

/// List the races of a championship by round
pub async fn list_races(pool: &PgPool, championship_slug: &str) -> Result<Vec<Race>> {
    let championship = ChampionshipRepository::new(pool)
        .find_by_slug(championship_slug)
        .await?;
    RaceRepository::new(pool)
        .list_for_championship(championship.championship_id)
        .await
}

/// Create a race and seed a zero-delta result for every active driver.
///
/// Returns the race and the number of seeded results.
pub async fn create_race(
    pool: &PgPool,
    championship_slug: &str,
    request: &CreateRaceRequest,
) -> Result<(Race, usize)> {
    let championship = ChampionshipRepository::new(pool)
        .find_by_slug(championship_slug)
        .await?;

    let drivers = DriverRepository::new(pool)
        .list_for_championship(championship.championship_id)
        .await?;
    let results = RaceResultRepository::new(pool)
        .list_for_championship(championship.championship_id)
        .await?;

    let seeds = plan_seeds(&drivers, &results, request.round_number);

    let race = RaceRepository::new(pool)
        .create_seeded(championship.championship_id, request, &seeds)
        .await?;

    tracing::info!(
        championship = %championship.slug,
        round = race.round_number,
        seeded = seeds.len(),
        "Race created and results seeded"
    );

    Ok((race, seeds.len()))
}

/// Update a race's name or date
pub async fn update_race(pool: &PgPool, race_id: Uuid, request: &UpdateRaceRequest) -> Result<Race> {
    let repo = RaceRepository::new(pool);

    let existing = repo.find_by_id(race_id).await?;
    repo.update(&existing, request).await
}

/// Delete a race together with its results
pub async fn delete_race(pool: &PgPool, race_id: Uuid) -> Result<()> {
    let repo = RaceRepository::new(pool);
    repo.delete(race_id).await
}
