use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::athlete::{AthleteIn, AthleteOut, AthleteUpdate},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{WebError, not_found};

use super::services;

#[utoipa::path(
    get,
    path = "/atletas",
    responses(
        (status = 200, description = "List all athletes successfully", body = Vec<AthleteOut>)
    ),
    tag = "atletas"
)]
pub async fn list_athletes(State(db): State<Database>) -> Result<Response, WebError> {
    let athletes = services::list_athletes(db.pool()).await?;

    let response: Vec<AthleteOut> = athletes.into_iter().map(AthleteOut::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/atletas/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteOut),
        (status = 404, description = "Athlete not found")
    ),
    tag = "atletas"
)]
pub async fn get_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let athlete = services::get_athlete(db.pool(), id)
        .await
        .map_err(not_found("Athlete", id))?;

    Ok(Json(AthleteOut::from(athlete)).into_response())
}

#[utoipa::path(
    post,
    path = "/atletas",
    request_body = AthleteIn,
    responses(
        (status = 201, description = "Athlete created successfully", body = AthleteOut),
        (status = 400, description = "Category or training center not found"),
        (status = 409, description = "An athlete with this CPF already exists"),
        (status = 422, description = "Validation error, malformed payload or unknown field")
    ),
    tag = "atletas"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    Json(req): Json<AthleteIn>,
) -> Result<Response, WebError> {
    req.validate()?;

    let athlete = services::create_athlete(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(AthleteOut::from(athlete))).into_response())
}

#[utoipa::path(
    patch,
    path = "/atletas/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    request_body = AthleteUpdate,
    responses(
        (status = 200, description = "Athlete updated successfully", body = AthleteOut),
        (status = 404, description = "Athlete not found"),
        (status = 422, description = "Validation error, malformed payload or field that cannot be updated")
    ),
    tag = "atletas"
)]
pub async fn update_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<AthleteUpdate>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_athlete(db.pool(), id, &update_req)
        .await
        .map_err(not_found("Athlete", id))?;

    Ok(Json(AthleteOut::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/atletas/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 204, description = "Athlete deleted successfully"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "atletas"
)]
pub async fn delete_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_athlete(db.pool(), id)
        .await
        .map_err(not_found("Athlete", id))?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
