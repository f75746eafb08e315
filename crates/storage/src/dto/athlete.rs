use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::category::CategoryRef;
use super::training_center::TrainingCenterRef;

/// Request payload for creating a new athlete.
///
/// The category and training center are referenced by name and resolved to
/// their ids before the row is written.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AthleteIn {
    #[schema(example = "João")]
    #[validate(length(max = 50, message = "Name must be at most 50 characters"))]
    pub nome: String,

    #[schema(example = "12345678900")]
    #[validate(length(max = 11, message = "CPF must be at most 11 characters"))]
    pub cpf: String,

    #[schema(example = 30)]
    pub idade: i32,

    #[schema(example = 75.5)]
    #[validate(range(exclusive_min = 0.0, message = "Weight must be positive"))]
    pub peso: f64,

    #[schema(example = 1.75)]
    #[validate(range(exclusive_min = 0.0, message = "Height must be positive"))]
    pub altura: f64,

    #[schema(example = "M")]
    #[validate(length(equal = 1, message = "Sex must be a single character"))]
    pub sexo: String,

    #[validate(nested)]
    pub categoria: CategoryRef,

    #[validate(nested)]
    pub centro_treinamento: TrainingCenterRef,
}

/// Athlete as returned by the API. Referenced entities are not embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AthleteOut {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub nome: String,
    pub cpf: String,
    pub idade: i32,
    pub peso: f64,
    pub altura: f64,
    pub sexo: String,
}

/// Request payload for a partial athlete update.
///
/// Only the name and age can change. Absent fields (and explicit `null`s)
/// leave the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AthleteUpdate {
    #[schema(example = "Maria")]
    #[validate(length(max = 50, message = "Name must be at most 50 characters"))]
    pub nome: Option<String>,

    #[schema(example = 31)]
    pub idade: Option<i32>,
}

impl AthleteUpdate {
    /// Overwrite the fields of `athlete` that are present in this update.
    pub fn apply_to(&self, athlete: &mut crate::models::Athlete) {
        if let Some(nome) = &self.nome {
            athlete.nome = nome.clone();
        }
        if let Some(idade) = self.idade {
            athlete.idade = idade;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nome.is_none() && self.idade.is_none()
    }
}

impl From<crate::models::Athlete> for AthleteOut {
    fn from(athlete: crate::models::Athlete) -> Self {
        Self {
            id: athlete.id,
            created_at: athlete.created_at,
            nome: athlete.nome,
            cpf: athlete.cpf,
            idade: athlete.idade,
            peso: athlete.peso,
            altura: athlete.altura,
            sexo: athlete.sexo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Athlete;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "nome": "João",
            "cpf": "12345678900",
            "idade": 30,
            "peso": 75.5,
            "altura": 1.75,
            "sexo": "M",
            "categoria": { "nome": "Scale" },
            "centro_treinamento": { "nome": "CT King" }
        })
    }

    fn stored() -> Athlete {
        Athlete {
            id: Uuid::new_v4(),
            created_at: chrono::Utc::now().naive_utc(),
            nome: "João".to_string(),
            cpf: "12345678900".to_string(),
            idade: 30,
            peso: 75.5,
            altura: 1.75,
            sexo: "M".to_string(),
            categoria_id: Uuid::new_v4(),
            centro_treinamento_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn well_formed_payload_validates() {
        let req: AthleteIn = serde_json::from_value(payload()).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.categoria.nome, "Scale");
        assert_eq!(req.centro_treinamento.nome, "CT King");
    }

    #[test]
    fn rejects_unknown_top_level_field() {
        let mut value = payload();
        value["apelido"] = json!("Jo");
        assert!(serde_json::from_value::<AthleteIn>(value).is_err());
    }

    #[test]
    fn rejects_unknown_field_in_reference() {
        let mut value = payload();
        value["categoria"] = json!({ "nome": "Scale", "id": "abc" });
        assert!(serde_json::from_value::<AthleteIn>(value).is_err());
    }

    #[test]
    fn weight_and_height_must_be_positive() {
        let mut value = payload();
        value["peso"] = json!(0.0);
        value["altura"] = json!(-1.75);
        let req: AthleteIn = serde_json::from_value(value).unwrap();

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("peso"));
        assert!(fields.contains_key("altura"));
    }

    #[test]
    fn sex_is_a_single_character() {
        let mut value = payload();
        value["sexo"] = json!("MF");
        let req: AthleteIn = serde_json::from_value(value).unwrap();
        assert!(
            req.validate()
                .unwrap_err()
                .field_errors()
                .contains_key("sexo")
        );
    }

    #[test]
    fn nested_reference_limits_are_checked() {
        let mut value = payload();
        value["centro_treinamento"] = json!({ "nome": "Centro de Treinamento King" });
        let req: AthleteIn = serde_json::from_value(value).unwrap();

        let errors = req.validate().unwrap_err();
        assert!(errors.errors().contains_key("centro_treinamento"));
    }

    #[test]
    fn update_only_permits_name_and_age() {
        assert!(serde_json::from_value::<AthleteUpdate>(json!({ "nome": "Maria" })).is_ok());
        assert!(serde_json::from_value::<AthleteUpdate>(json!({ "idade": 31 })).is_ok());
        assert!(serde_json::from_value::<AthleteUpdate>(json!({ "cpf": "00000000000" })).is_err());
        assert!(serde_json::from_value::<AthleteUpdate>(json!({ "peso": 80.0 })).is_err());
    }

    #[test]
    fn update_enforces_name_length() {
        let update = AthleteUpdate {
            nome: Some("x".repeat(51)),
            idade: None,
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn apply_changes_only_present_fields() {
        let original = stored();
        let mut athlete = original.clone();

        let update: AthleteUpdate = serde_json::from_value(json!({ "nome": "Maria" })).unwrap();
        update.apply_to(&mut athlete);

        assert_eq!(athlete.nome, "Maria");
        assert_eq!(athlete.idade, original.idade);
        assert_eq!(athlete.cpf, original.cpf);
        assert_eq!(athlete.peso, original.peso);
        assert_eq!(athlete.categoria_id, original.categoria_id);
    }

    #[test]
    fn null_is_treated_as_absent() {
        let original = stored();
        let mut athlete = original.clone();

        let update: AthleteUpdate =
            serde_json::from_value(json!({ "nome": null, "idade": 40 })).unwrap();
        update.apply_to(&mut athlete);

        assert_eq!(athlete.nome, original.nome);
        assert_eq!(athlete.idade, 40);
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let original = stored();
        let mut athlete = original.clone();

        let update = AthleteUpdate::default();
        assert!(update.is_empty());
        update.apply_to(&mut athlete);

        assert_eq!(athlete, original);
    }

    #[test]
    fn output_drops_references() {
        let athlete = stored();
        let out = AthleteOut::from(athlete.clone());
        let value = serde_json::to_value(&out).unwrap();

        assert_eq!(out.id, athlete.id);
        assert!(value.get("categoria_id").is_none());
        assert!(value.get("centro_treinamento_id").is_none());
        assert!(value.get("categoria").is_none());
    }
}
