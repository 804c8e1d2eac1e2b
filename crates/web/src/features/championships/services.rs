use sqlx::PgPool;
use storage::{
    dto::championship::CreateChampionshipRequest, error::Result, models::Championship,
    repository::championship::ChampionshipRepository,
};

/// List all championships
pub async fn list_championships(pool: &PgPool) -> Result<Vec<Championship>> {
    let repo = ChampionshipRepository::new(pool);
    repo.list().await
}

/// Get championship by slug
pub async fn get_championship(pool: &PgPool, slug: &str) -> Result<Championship> {
    let repo = ChampionshipRepository::new(pool);
    repo.find_by_slug(slug).await
}

/// Create a new championship
pub async fn create_championship(
    pool: &PgPool,
    request: &CreateChampionshipRequest,
) -> Result<Championship> {
    let repo = ChampionshipRepository::new(pool);
    repo.create(request).await
}

/// Delete a championship and everything in it
pub async fn delete_championship(pool: &PgPool, slug: &str) -> Result<()> {
    let repo = ChampionshipRepository::new(pool);
    let championship = repo.find_by_slug(slug).await?;
    repo.delete(championship.championship_id).await
}
