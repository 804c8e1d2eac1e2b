use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::championship::CreateChampionshipRequest;
use crate::error::{Result, StorageError};
use crate::models::Championship;

const CHAMPIONSHIP_COLUMNS: &str = "championship_id, name, slug, season, created_at";

/// Repository for Championship database operations
pub struct ChampionshipRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ChampionshipRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all championships, most recent season first
    pub async fn list(&self) -> Result<Vec<Championship>> {
        let championships = sqlx::query_as::<_, Championship>(&format!(
            "SELECT {CHAMPIONSHIP_COLUMNS} FROM championships \
             ORDER BY season DESC NULLS LAST, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(championships)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Championship> {
        sqlx::query_as::<_, Championship>(&format!(
            "SELECT {CHAMPIONSHIP_COLUMNS} FROM championships WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Championship> {
        sqlx::query_as::<_, Championship>(&format!(
            "SELECT {CHAMPIONSHIP_COLUMNS} FROM championships WHERE championship_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, req: &CreateChampionshipRequest) -> Result<Championship> {
        sqlx::query_as::<_, Championship>(&format!(
            "INSERT INTO championships (name, slug, season) VALUES ($1, $2, $3) \
             RETURNING {CHAMPIONSHIP_COLUMNS}"
        ))
        .bind(&req.name)
        .bind(&req.slug)
        .bind(req.season)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_messages("Slug already exists", "Invalid championship data")
        })
    }

    /// Delete a championship with all of its drivers, races and results
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM championships WHERE championship_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
