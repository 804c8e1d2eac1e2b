use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Driver {
    pub driver_id: Uuid,
    pub championship_id: Uuid,
    pub name: String,
    pub car: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::NaiveDateTime,
}
