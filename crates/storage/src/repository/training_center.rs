use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::training_center::TrainingCenterIn;
use crate::error::{Result, StorageError};
use crate::models::TrainingCenter;

/// Repository for TrainingCenter database operations
pub struct TrainingCenterRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TrainingCenterRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all training centers
    pub async fn list(&self) -> Result<Vec<TrainingCenter>> {
        let centers = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT id, nome, endereco, proprietario
            FROM centros_treinamento
            ORDER BY nome
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(centers)
    }

    /// Find training center by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<TrainingCenter> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT id, nome, endereco, proprietario
            FROM centros_treinamento
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(center)
    }

    /// Create a new training center
    pub async fn create(&self, req: &TrainingCenterIn) -> Result<TrainingCenter> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            INSERT INTO centros_treinamento (id, nome, endereco, proprietario)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nome, endereco, proprietario
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.nome)
        .bind(&req.endereco)
        .bind(&req.proprietario)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_unique_violation(|| format!("Training center {} already exists", req.nome))
        })?;

        Ok(center)
    }
}

/// Resolve a training center name to its id inside an open transaction.
pub(crate) async fn resolve_id(conn: &mut PgConnection, nome: &str) -> Result<Uuid> {
    sqlx::query_scalar::<_, Uuid>("SELECT id FROM centros_treinamento WHERE nome = $1 FOR SHARE")
        .bind(nome)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| StorageError::TrainingCenterNotFound(nome.to_string()))
}
