use axum::{
    Router, middleware,
    routing::{post, put},
};

use super::handlers::{create_result, delete_result, save_result};
use crate::middleware::auth::require_admin;
use crate::state::AppState;

/// Every result route is admin-only
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/results", post(create_result))
        .route("/results/:result_id", put(save_result).delete(delete_result))
        .route_layer(middleware::from_fn(require_admin))
}
