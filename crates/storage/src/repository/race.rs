use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::race::{CreateRaceRequest, UpdateRaceRequest};
use crate::error::{Result, StorageError};
use crate::models::Race;
use crate::services::seeding::SeedRow;

const RACE_COLUMNS: &str = "race_id, championship_id, round_number, name, race_date, created_at";

pub struct RaceRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RaceRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Races of a championship in ascending round order
    pub async fn list_for_championship(&self, championship_id: Uuid) -> Result<Vec<Race>> {
        let races = sqlx::query_as::<_, Race>(&format!(
            "SELECT {RACE_COLUMNS} FROM races \
             WHERE championship_id = $1 \
             ORDER BY round_number"
        ))
        .bind(championship_id)
        .fetch_all(self.pool)
        .await?;

        Ok(races)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Race> {
        sqlx::query_as::<_, Race>(&format!("SELECT {RACE_COLUMNS} FROM races WHERE race_id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    /// Insert a race together with its seeded results in one transaction
    pub async fn create_seeded(
        &self,
        championship_id: Uuid,
        req: &CreateRaceRequest,
        seeds: &[SeedRow],
    ) -> Result<Race> {
        let mut tx = self.pool.begin().await?;

        let race = sqlx::query_as::<_, Race>(&format!(
            "INSERT INTO races (championship_id, round_number, name, race_date) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {RACE_COLUMNS}"
        ))
        .bind(championship_id)
        .bind(req.round_number)
        .bind(&req.name)
        .bind(req.race_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_messages(
                "Round number already exists in this championship",
                "Championship does not exist",
            )
        })?;

        for seed in seeds {
            sqlx::query(
                r#"
                INSERT INTO results (
                    driver_id, race_id, cp_before, pi_before, penalty_before,
                    cp_after, pi_after, penalty_for_next
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(seed.driver_id)
            .bind(race.race_id)
            .bind(seed.sheet.cp_before)
            .bind(seed.sheet.pi_before)
            .bind(seed.sheet.penalty_before)
            .bind(seed.sheet.cp_after)
            .bind(seed.sheet.pi_after)
            .bind(seed.sheet.penalty_for_next)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                StorageError::from(e)
                    .with_constraint_messages("Result already exists", "Driver does not exist")
            })?;
        }

        tx.commit().await?;

        Ok(race)
    }

    pub async fn update(&self, existing: &Race, req: &UpdateRaceRequest) -> Result<Race> {
        let name = match &req.name {
            Some(name) => name.as_ref(),
            None => existing.name.as_ref(),
        };
        let race_date = req.race_date.unwrap_or(existing.race_date);

        sqlx::query_as::<_, Race>(&format!(
            "UPDATE races SET name = $2, race_date = $3 \
             WHERE race_id = $1 \
             RETURNING {RACE_COLUMNS}"
        ))
        .bind(existing.race_id)
        .bind(name)
        .bind(race_date)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM races WHERE race_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
