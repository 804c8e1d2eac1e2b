use sqlx::PgPool;
use storage::{
    dto::driver::{CreateDriverRequest, UpdateDriverRequest},
    error::Result,
    models::Driver,
    repository::{championship::ChampionshipRepository, driver::DriverRepository},
};
use uuid::Uuid;

/// List the drivers of a championship
pub async fn list_drivers(pool: &PgPool, championship_slug: &str) -> Result<Vec<Driver>> {
    let championship = ChampionshipRepository::new(pool)
        .find_by_slug(championship_slug)
        .await?;
    DriverRepository::new(pool)
        .list_for_championship(championship.championship_id)
        .await
}

/// Add a driver to a championship
pub async fn create_driver(
    pool: &PgPool,
    championship_slug: &str,
    request: &CreateDriverRequest,
) -> Result<Driver> {
    let championship = ChampionshipRepository::new(pool)
        .find_by_slug(championship_slug)
        .await?;
    DriverRepository::new(pool)
        .create(championship.championship_id, request)
        .await
}

/// Update a driver
pub async fn update_driver(
    pool: &PgPool,
    driver_id: Uuid,
    request: &UpdateDriverRequest,
) -> Result<Driver> {
    let repo = DriverRepository::new(pool);

    let existing = repo.find_by_id(driver_id).await?;
    repo.update(&existing, request).await
}

/// Delete a driver together with its results
pub async fn delete_driver(pool: &PgPool, driver_id: Uuid) -> Result<()> {
    let repo = DriverRepository::new(pool);
    repo.delete(driver_id).await
}
