use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::handlers::{create_race, delete_race, list_races, update_race};
use crate::middleware::auth::require_admin;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let protected = Router::new()
        .route("/championships/:slug/races", post(create_race))
        .route("/races/:race_id", put(update_race).delete(delete_race))
        .route_layer(middleware::from_fn(require_admin));

    Router::new()
        .route("/championships/:slug/races", get(list_races))
        .merge(protected)
}
