use axum::{Extension, Json};
use storage::dto::session::SessionResponse;

use crate::middleware::auth::Caller;

#[utoipa::path(
    get,
    path = "/api/session",
    security(
        (),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Identity and capability of the caller", body = SessionResponse)
    ),
    tag = "session"
)]
pub async fn get_session(Extension(caller): Extension<Caller>) -> Json<SessionResponse> {
    Json(SessionResponse {
        user_id: caller.user_id,
        capability: caller.capability,
    })
}
