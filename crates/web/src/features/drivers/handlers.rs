use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::driver::{CreateDriverRequest, UpdateDriverRequest},
    models::Driver,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/championships/{slug}/drivers",
    params(
        ("slug" = String, Path, description = "Championship slug")
    ),
    responses(
        (status = 200, description = "Drivers in registration order", body = Vec<Driver>),
        (status = 404, description = "Championship not found")
    ),
    tag = "drivers"
)]
pub async fn list_drivers(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let drivers = services::list_drivers(db.pool(), &slug).await?;

    Ok(Json(drivers).into_response())
}

#[utoipa::path(
    post,
    path = "/api/championships/{slug}/drivers",
    params(
        ("slug" = String, Path, description = "Championship slug")
    ),
    request_body = CreateDriverRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Driver created successfully", body = Driver),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Championship not found")
    ),
    tag = "drivers"
)]
pub async fn create_driver(
    State(db): State<Database>,
    Path(slug): Path<String>,
    Json(req): Json<CreateDriverRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let driver = services::create_driver(db.pool(), &slug, &req).await?;
    tracing::info!(driver_id = %driver.driver_id, championship = %slug, "Driver created");

    Ok((StatusCode::CREATED, Json(driver)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/drivers/{driver_id}",
    params(
        ("driver_id" = Uuid, Path, description = "Driver ID")
    ),
    request_body = UpdateDriverRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Driver updated successfully", body = Driver),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Driver not found")
    ),
    tag = "drivers"
)]
pub async fn update_driver(
    State(db): State<Database>,
    Path(driver_id): Path<Uuid>,
    Json(update_req): Json<UpdateDriverRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_driver(db.pool(), driver_id, &update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/drivers/{driver_id}",
    params(
        ("driver_id" = Uuid, Path, description = "Driver ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Driver and its results deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Driver not found")
    ),
    tag = "drivers"
)]
pub async fn delete_driver(
    State(db): State<Database>,
    Path(driver_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_driver(db.pool(), driver_id).await?;
    tracing::info!(%driver_id, "Driver deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
