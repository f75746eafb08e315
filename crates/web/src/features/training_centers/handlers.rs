use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::training_center::{TrainingCenterIn, TrainingCenterOut},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{WebError, not_found};

use super::services;

#[utoipa::path(
    get,
    path = "/centros",
    responses(
        (status = 200, description = "List all training centers successfully", body = Vec<TrainingCenterOut>)
    ),
    tag = "centros"
)]
pub async fn list_training_centers(State(db): State<Database>) -> Result<Response, WebError> {
    let centers = services::list_training_centers(db.pool()).await?;

    let response: Vec<TrainingCenterOut> =
        centers.into_iter().map(TrainingCenterOut::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/centros/{id}",
    params(
        ("id" = Uuid, Path, description = "Training center id")
    ),
    responses(
        (status = 200, description = "Training center found", body = TrainingCenterOut),
        (status = 404, description = "Training center not found")
    ),
    tag = "centros"
)]
pub async fn get_training_center(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let center = services::get_training_center(db.pool(), id)
        .await
        .map_err(not_found("Training center", id))?;

    Ok(Json(TrainingCenterOut::from(center)).into_response())
}

#[utoipa::path(
    post,
    path = "/centros",
    request_body = TrainingCenterIn,
    responses(
        (status = 201, description = "Training center created successfully", body = TrainingCenterOut),
        (status = 409, description = "A training center with this name already exists"),
        (status = 422, description = "Validation error, malformed payload or unknown field")
    ),
    tag = "centros"
)]
pub async fn create_training_center(
    State(db): State<Database>,
    Json(req): Json<TrainingCenterIn>,
) -> Result<Response, WebError> {
    req.validate()?;

    let center = services::create_training_center(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(TrainingCenterOut::from(center))).into_response())
}
