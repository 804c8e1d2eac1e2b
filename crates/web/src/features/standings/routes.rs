use axum::{Router, routing::get};

use super::handlers::{get_snapshot, get_standings};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/championships/:slug/standings", get(get_standings))
        .route("/championships/:slug/snapshot", get(get_snapshot))
}
