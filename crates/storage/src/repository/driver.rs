use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::driver::{CreateDriverRequest, UpdateDriverRequest};
use crate::error::{Result, StorageError};
use crate::models::Driver;

const DRIVER_COLUMNS: &str = "driver_id, championship_id, name, car, is_active, created_at";

pub struct DriverRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DriverRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Drivers of a championship in registration order.
    ///
    /// This order is what breaks ties in the standings.
    pub async fn list_for_championship(&self, championship_id: Uuid) -> Result<Vec<Driver>> {
        let drivers = sqlx::query_as::<_, Driver>(&format!(
            "SELECT {DRIVER_COLUMNS} FROM drivers \
             WHERE championship_id = $1 \
             ORDER BY created_at, name, driver_id"
        ))
        .bind(championship_id)
        .fetch_all(self.pool)
        .await?;

        Ok(drivers)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Driver> {
        sqlx::query_as::<_, Driver>(&format!(
            "SELECT {DRIVER_COLUMNS} FROM drivers WHERE driver_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, championship_id: Uuid, req: &CreateDriverRequest) -> Result<Driver> {
        sqlx::query_as::<_, Driver>(&format!(
            "INSERT INTO drivers (championship_id, name, car, is_active) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {DRIVER_COLUMNS}"
        ))
        .bind(championship_id)
        .bind(&req.name)
        .bind(&req.car)
        .bind(req.is_active)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .with_constraint_messages("Driver already exists", "Championship does not exist")
        })
    }

    pub async fn update(&self, existing: &Driver, req: &UpdateDriverRequest) -> Result<Driver> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let car = match &req.car {
            Some(car) => car.as_ref(),
            None => existing.car.as_ref(),
        };
        let is_active = req.is_active.unwrap_or(existing.is_active);

        sqlx::query_as::<_, Driver>(&format!(
            "UPDATE drivers SET name = $2, car = $3, is_active = $4 \
             WHERE driver_id = $1 \
             RETURNING {DRIVER_COLUMNS}"
        ))
        .bind(existing.driver_id)
        .bind(name)
        .bind(car)
        .bind(is_active)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Hard delete; the driver's results go with it
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM drivers WHERE driver_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
