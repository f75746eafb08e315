use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use uuid::Uuid;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    NotFound(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::CategoryNotFound(_)) => StatusCode::BAD_REQUEST,
            Self::Storage(StorageError::TrainingCenterNotFound(_)) => StatusCode::BAD_REQUEST,
            Self::Storage(StorageError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let body = match &self {
            Self::Storage(StorageError::NotFound) => {
                json!({
                    "error": "Resource not found"
                })
            }
            Self::Storage(
                e @ (StorageError::CategoryNotFound(_) | StorageError::TrainingCenterNotFound(_)),
            ) => {
                json!({
                    "error": e.to_string()
                })
            }
            Self::Storage(StorageError::ConstraintViolation(msg)) => {
                json!({
                    "error": msg
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Validation(errors) => {
                let mut field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                // Nested reference payloads (categoria, centro_treinamento)
                for (field, kind) in errors.errors() {
                    if let validator::ValidationErrorsKind::Struct(nested) = kind {
                        for (inner, errors) in nested.field_errors() {
                            for e in errors.iter() {
                                field_errors.push(format!(
                                    "{}.{}: {}",
                                    field,
                                    inner,
                                    e.message
                                        .as_ref()
                                        .map(|m| m.to_string())
                                        .unwrap_or_else(|| e.code.to_string())
                                ));
                            }
                        }
                    }
                }
                field_errors.sort();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::NotFound(msg) => {
                json!({
                    "error": msg
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

/// Map `StorageError::NotFound` to a 404 naming the entity and id that were
/// looked up. Other storage errors pass through unchanged.
pub fn not_found(entity: &'static str, id: Uuid) -> impl FnOnce(StorageError) -> WebError {
    move |error| match error {
        StorageError::NotFound => {
            WebError::NotFound(format!("{} not found with id = {}", entity, id))
        }
        other => WebError::Storage(other),
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use validator::Validate;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_reference_is_a_bad_request_naming_the_key() {
        let response =
            WebError::from(StorageError::CategoryNotFound("Elite".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Category Elite not found");
    }

    #[tokio::test]
    async fn not_found_names_entity_and_id() {
        let id = Uuid::nil();
        let response = not_found("Athlete", id)(StorageError::NotFound).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "Athlete not found with id = 00000000-0000-0000-0000-000000000000"
        );
    }

    #[tokio::test]
    async fn not_found_mapper_keeps_other_errors() {
        let error = not_found("Athlete", Uuid::nil())(StorageError::ConstraintViolation(
            "An athlete with CPF 1 already exists".to_string(),
        ));

        assert_eq!(error.status_code(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn unexpected_storage_errors_are_opaque() {
        let response =
            WebError::from(StorageError::from(sqlx::Error::PoolTimedOut)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "An internal error occurred");
    }

    #[tokio::test]
    async fn validation_errors_list_fields() {
        let req = storage::dto::category::CategoryIn {
            nome: "Intermediario".to_string(),
        };
        let response = WebError::from(req.validate().unwrap_err()).into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(
            body["details"][0],
            "nome: Name must be at most 10 characters"
        );
    }
}
