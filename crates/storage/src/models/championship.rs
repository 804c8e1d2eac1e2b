use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Championship {
    pub championship_id: Uuid,
    pub name: String,
    pub slug: String,
    pub season: Option<i32>,
    pub created_at: chrono::NaiveDateTime,
}
