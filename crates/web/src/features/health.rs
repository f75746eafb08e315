use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use storage::Database;

use crate::error::WebResult;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are reachable"),
        (status = 500, description = "Database is unreachable")
    ),
    tag = "health"
)]
pub async fn health_check(State(db): State<Database>) -> WebResult<impl IntoResponse> {
    db.ping().await?;
    Ok(Json(json!({ "status": "ok" })))
}
