use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::race::{CreateRaceRequest, CreateRaceResponse, UpdateRaceRequest},
    models::Race,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/championships/{slug}/races",
    params(
        ("slug" = String, Path, description = "Championship slug")
    ),
    responses(
        (status = 200, description = "Races in ascending round order", body = Vec<Race>),
        (status = 404, description = "Championship not found")
    ),
    tag = "races"
)]
pub async fn list_races(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let races = services::list_races(db.pool(), &slug).await?;

    Ok(Json(races).into_response())
}

#[utoipa::path(
    post,
    path = "/api/championships/{slug}/races",
    params(
        ("slug" = String, Path, description = "Championship slug")
    ),
    request_body = CreateRaceRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Race created and results seeded for active drivers", body = CreateRaceResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Championship not found"),
        (status = 409, description = "Round number already exists")
    ),
    tag = "races"
)]
pub async fn create_race(
    State(db): State<Database>,
    Path(slug): Path<String>,
    Json(req): Json<CreateRaceRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let (race, seeded_results) = services::create_race(db.pool(), &slug, &req).await?;

    let response = CreateRaceResponse {
        display_name: race.display_name(),
        race,
        seeded_results,
    };

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/races/{race_id}",
    params(
        ("race_id" = Uuid, Path, description = "Race ID")
    ),
    request_body = UpdateRaceRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Race updated successfully", body = Race),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Race not found")
    ),
    tag = "races"
)]
pub async fn update_race(
    State(db): State<Database>,
    Path(race_id): Path<Uuid>,
    Json(update_req): Json<UpdateRaceRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_race(db.pool(), race_id, &update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/races/{race_id}",
    params(
        ("race_id" = Uuid, Path, description = "Race ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Race and its results deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Race not found")
    ),
    tag = "races"
)]
pub async fn delete_race(
    State(db): State<Database>,
    Path(race_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_race(db.pool(), race_id).await?;
    tracing::info!(%race_id, "Race deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
