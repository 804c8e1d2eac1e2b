use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::handlers::{create_driver, delete_driver, list_drivers, update_driver};
use crate::middleware::auth::require_admin;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let protected = Router::new()
        .route("/championships/:slug/drivers", post(create_driver))
        .route("/drivers/:driver_id", put(update_driver).delete(delete_driver))
        .route_layer(middleware::from_fn(require_admin));

    Router::new()
        .route("/championships/:slug/drivers", get(list_drivers))
        .merge(protected)
}
