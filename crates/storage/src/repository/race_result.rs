use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::race_result::CreateResultRequest;
use crate::error::{Result, StorageError};
use crate::models::{RaceResult, RoundResult, ScoreSheet};

const RESULT_COLUMNS: &str = "result_id, driver_id, race_id, cp_before, pi_before, penalty_before, \
                              cp_after, pi_after, penalty_for_next, created_at";

pub struct RaceResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RaceResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every result of the championship's drivers with its race round.
    ///
    /// Rows whose race cannot be found carry round 0.
    pub async fn list_for_championship(&self, championship_id: Uuid) -> Result<Vec<RoundResult>> {
        let rows = sqlx::query_as::<_, RoundResult>(
            r#"
            SELECT
                res.result_id, res.driver_id, res.race_id,
                res.cp_before, res.pi_before, res.penalty_before,
                res.cp_after, res.pi_after, res.penalty_for_next, res.created_at,
                COALESCE(r.round_number, 0) AS round_number
            FROM results res
            INNER JOIN drivers d ON d.driver_id = res.driver_id
            LEFT JOIN races r ON r.race_id = res.race_id
            WHERE d.championship_id = $1
            ORDER BY res.created_at, res.result_id
            "#,
        )
        .bind(championship_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<RaceResult> {
        sqlx::query_as::<_, RaceResult>(&format!(
            "SELECT {RESULT_COLUMNS} FROM results WHERE result_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, req: &CreateResultRequest) -> Result<RaceResult> {
        sqlx::query_as::<_, RaceResult>(&format!(
            "INSERT INTO results ( \
                 driver_id, race_id, cp_before, pi_before, penalty_before, \
                 cp_after, pi_after, penalty_for_next \
             ) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {RESULT_COLUMNS}"
        ))
        .bind(req.driver_id)
        .bind(req.race_id)
        .bind(req.sheet.cp_before)
        .bind(req.sheet.pi_before)
        .bind(req.sheet.penalty_before)
        .bind(req.sheet.cp_after)
        .bind(req.sheet.pi_after)
        .bind(req.sheet.penalty_for_next)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_messages(
                "Driver already has a result for this race",
                "Driver or race does not exist",
            )
        })
    }

    /// Overwrite all six scoring fields of one result
    pub async fn update_sheet(&self, id: Uuid, sheet: &ScoreSheet) -> Result<RaceResult> {
        sqlx::query_as::<_, RaceResult>(&format!(
            "UPDATE results SET \
                 cp_before = $2, pi_before = $3, penalty_before = $4, \
                 cp_after = $5, pi_after = $6, penalty_for_next = $7 \
             WHERE result_id = $1 \
             RETURNING {RESULT_COLUMNS}"
        ))
        .bind(id)
        .bind(sheet.cp_before)
        .bind(sheet.pi_before)
        .bind(sheet.penalty_before)
        .bind(sheet.cp_after)
        .bind(sheet.pi_after)
        .bind(sheet.penalty_for_next)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM results WHERE result_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
