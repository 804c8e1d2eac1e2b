use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use storage::{
    Database,
    dto::{
        race_result::{CreateResultRequest, UpdateResultRequest},
        standings::ChampionshipSnapshot,
    },
    models::RaceResult,
};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Caller;

use super::services;

/// Saved result together with the recomputed championship
#[derive(Debug, Serialize, ToSchema)]
pub struct SaveResultResponse {
    pub result: RaceResult,
    pub snapshot: ChampionshipSnapshot,
}

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = CreateResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Result created", body = RaceResult),
        (status = 400, description = "Score out of range, or driver and race belong to different championships"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Driver or race not found"),
        (status = 409, description = "Driver already has a result for this race")
    ),
    tag = "results"
)]
pub async fn create_result(
    State(db): State<Database>,
    Json(req): Json<CreateResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let (driver, race) = services::find_pair(db.pool(), req.driver_id, req.race_id).await?;
    if driver.championship_id != race.championship_id {
        return Err(WebError::BadRequest(
            "Driver and race belong to different championships".to_string(),
        ));
    }

    let result = services::create_result(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(result)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/results/{result_id}",
    params(
        ("result_id" = Uuid, Path, description = "Result ID")
    ),
    request_body = UpdateResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Result saved and championship recomputed", body = SaveResultResponse),
        (status = 400, description = "Score out of range"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn save_result(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(result_id): Path<Uuid>,
    Json(req): Json<UpdateResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let (result, snapshot) =
        services::save_result(db.pool(), result_id, &req.sheet, caller.capability).await?;

    Ok(Json(SaveResultResponse { result, snapshot }).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/results/{result_id}",
    params(
        ("result_id" = Uuid, Path, description = "Result ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Result deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn delete_result(
    State(db): State<Database>,
    Path(result_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_result(db.pool(), result_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
