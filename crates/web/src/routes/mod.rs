use axum::{Router, middleware};

use crate::features::{championships, drivers, races, results, session, standings};
use crate::middleware::auth::resolve_caller;
use crate::state::AppState;

/// All `/api` routes with caller resolution applied to every request
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(championships::routes::routes())
        .merge(drivers::routes::routes())
        .merge(races::routes::routes())
        .merge(results::routes::routes())
        .merge(standings::routes::routes())
        .merge(session::routes::routes())
        .layer(middleware::from_fn_with_state(state.clone(), resolve_caller));

    Router::new().nest("/api", api).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::auth::SessionTokens;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header::AUTHORIZATION},
    };
    use storage::Database;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let db = Database::connect_lazy("postgres://localhost/unused").unwrap();
        api_router(AppState {
            db,
            tokens: SessionTokens::default(),
        })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn anonymous_session_is_viewer() {
        let response = test_router()
            .oneshot(Request::get("/api/session").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["capability"], "viewer");
        assert!(body["user_id"].is_null());
    }

    #[tokio::test]
    async fn admin_routes_reject_anonymous_callers() {
        let response = test_router()
            .oneshot(
                Request::post("/api/championships")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name": "Cup", "slug": "cup"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_token_is_treated_as_anonymous() {
        let response = test_router()
            .oneshot(
                Request::put("/api/results/00000000-0000-0000-0000-000000000001")
                    .header(AUTHORIZATION, "Bearer not-issued")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn delete_driver_requires_admin() {
        let response = test_router()
            .oneshot(
                Request::delete("/api/drivers/00000000-0000-0000-0000-000000000001")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
