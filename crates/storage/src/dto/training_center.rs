use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a training center
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct TrainingCenterIn {
    #[schema(example = "CT King")]
    #[validate(length(max = 20, message = "Name must be at most 20 characters"))]
    pub nome: String,

    #[schema(example = "Rua das Flores, 123")]
    #[validate(length(max = 60, message = "Address must be at most 60 characters"))]
    pub endereco: String,

    #[schema(example = "Carlos")]
    #[validate(length(max = 30, message = "Owner must be at most 30 characters"))]
    pub proprietario: String,
}

/// Training center as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrainingCenterOut {
    pub id: Uuid,
    pub nome: String,
    pub endereco: String,
    pub proprietario: String,
}

/// Reference to an existing training center by name, embedded in athlete payloads
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct TrainingCenterRef {
    #[schema(example = "CT King")]
    #[validate(length(
        max = 20,
        message = "Training center name must be at most 20 characters"
    ))]
    pub nome: String,
}

impl From<crate::models::TrainingCenter> for TrainingCenterOut {
    fn from(center: crate::models::TrainingCenter) -> Self {
        Self {
            id: center.id,
            nome: center.nome,
            endereco: center.endereco,
            proprietario: center.proprietario,
        }
    }
}
