use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::championship::CreateChampionshipRequest, models::Championship};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/championships",
    responses(
        (status = 200, description = "List all championships", body = Vec<Championship>)
    ),
    tag = "championships"
)]
pub async fn list_championships(State(db): State<Database>) -> Result<Response, WebError> {
    let championships = services::list_championships(db.pool()).await?;

    Ok(Json(championships).into_response())
}

#[utoipa::path(
    get,
    path = "/api/championships/{slug}",
    params(
        ("slug" = String, Path, description = "Championship slug")
    ),
    responses(
        (status = 200, description = "Championship found", body = Championship),
        (status = 404, description = "Championship not found")
    ),
    tag = "championships"
)]
pub async fn get_championship(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let championship = services::get_championship(db.pool(), &slug).await?;

    Ok(Json(championship).into_response())
}

#[utoipa::path(
    post,
    path = "/api/championships",
    request_body = CreateChampionshipRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Championship created successfully", body = Championship),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not an admin"),
        (status = 409, description = "Slug already exists")
    ),
    tag = "championships"
)]
pub async fn create_championship(
    State(db): State<Database>,
    Json(req): Json<CreateChampionshipRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let championship = services::create_championship(db.pool(), &req).await?;
    tracing::info!(slug = %championship.slug, "Championship created");

    Ok((StatusCode::CREATED, Json(championship)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/championships/{slug}",
    params(
        ("slug" = String, Path, description = "Championship slug")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Championship deleted with its drivers, races and results"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Championship not found")
    ),
    tag = "championships"
)]
pub async fn delete_championship(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    services::delete_championship(db.pool(), &slug).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
