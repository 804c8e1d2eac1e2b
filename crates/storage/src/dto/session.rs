use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Capability;

/// Who the caller is, as resolved from the bearer token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub user_id: Option<Uuid>,
    pub capability: Capability,
}
