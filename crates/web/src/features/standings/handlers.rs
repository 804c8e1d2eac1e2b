use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::standings::{ChampionshipSnapshot, Standing},
};

use crate::error::WebError;
use crate::middleware::auth::Caller;

use super::services;

#[utoipa::path(
    get,
    path = "/api/championships/{slug}/standings",
    params(
        ("slug" = String, Path, description = "Championship slug")
    ),
    responses(
        (status = 200, description = "Drivers ranked by current cp", body = Vec<Standing>),
        (status = 404, description = "Championship not found")
    ),
    tag = "standings"
)]
pub async fn get_standings(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let standings = services::get_standings(db.pool(), &slug).await?;

    Ok(Json(standings).into_response())
}

#[utoipa::path(
    get,
    path = "/api/championships/{slug}/snapshot",
    params(
        ("slug" = String, Path, description = "Championship slug")
    ),
    security(
        (),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Standings and race grid; admin callers also get editable cell fields", body = ChampionshipSnapshot),
        (status = 404, description = "Championship not found")
    ),
    tag = "standings"
)]
pub async fn get_snapshot(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let snapshot = services::get_snapshot(db.pool(), &slug, caller.capability).await?;

    Ok(Json(snapshot).into_response())
}
