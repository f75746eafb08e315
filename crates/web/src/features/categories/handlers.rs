use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::category::{CategoryIn, CategoryOut},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/categorias",
    request_body = CategoryIn,
    responses(
        (status = 201, description = "Category created successfully", body = CategoryOut),
        (status = 409, description = "A category with this name already exists"),
        (status = 422, description = "Validation error, malformed payload or unknown field")
    ),
    tag = "categorias"
)]
pub async fn create_category(
    State(db): State<Database>,
    Json(req): Json<CategoryIn>,
) -> Result<Response, WebError> {
    req.validate()?;

    let category = services::create_category(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CategoryOut::from(category))).into_response())
}
