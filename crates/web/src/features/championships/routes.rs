use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use super::handlers::{
    create_championship, delete_championship, get_championship, list_championships,
};
use crate::middleware::auth::require_admin;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let protected = Router::new()
        .route("/championships", post(create_championship))
        .route("/championships/:slug", delete(delete_championship))
        .route_layer(middleware::from_fn(require_admin));

    Router::new()
        .route("/championships", get(list_championships))
        .route("/championships/:slug", get(get_championship))
        .merge(protected)
}
