use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CategoryIn {
    #[schema(example = "Scale")]
    #[validate(length(max = 10, message = "Name must be at most 10 characters"))]
    pub nome: String,
}

/// Category as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryOut {
    pub id: Uuid,
    pub nome: String,
}

/// Reference to an existing category by name, embedded in athlete payloads
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CategoryRef {
    #[schema(example = "Scale")]
    #[validate(length(max = 10, message = "Category name must be at most 10 characters"))]
    pub nome: String,
}

impl From<crate::models::Category> for CategoryOut {
    fn from(category: crate::models::Category) -> Self {
        Self {
            id: category.id,
            nome: category.nome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_name_up_to_ten_characters() {
        let req: CategoryIn = serde_json::from_value(json!({ "nome": "Scale" })).unwrap();
        assert!(req.validate().is_ok());

        let req = CategoryIn {
            nome: "a".repeat(10),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_long_name() {
        let req = CategoryIn {
            nome: "Intermediario".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("nome"));
    }

    #[test]
    fn length_is_counted_in_characters() {
        let req = CategoryIn {
            nome: "Iniciação1".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = serde_json::from_value::<CategoryIn>(json!({ "nome": "RX", "id": 1 }));
        assert!(result.is_err());
    }
}
