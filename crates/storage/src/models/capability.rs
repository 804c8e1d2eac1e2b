use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What the caller of a request is allowed to see and do.
///
/// Resolved once per request and passed down explicitly to anything that
/// renders differently for admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    #[default]
    Viewer,
    Admin,
}

impl Capability {
    pub fn is_admin(self) -> bool {
        self == Capability::Admin
    }
}
