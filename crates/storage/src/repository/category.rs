use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::category::CategoryIn;
use crate::error::{Result, StorageError};
use crate::models::Category;

/// Repository for Category database operations
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new category with a freshly generated id
    pub async fn create(&self, req: &CategoryIn) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categorias (id, nome)
            VALUES ($1, $2)
            RETURNING id, nome
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.nome)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_unique_violation(|| format!("Category {} already exists", req.nome))
        })?;

        Ok(category)
    }
}

/// Resolve a category name to its id inside an open transaction.
///
/// The row is share-locked so it cannot be deleted before the caller commits.
pub(crate) async fn resolve_id(conn: &mut PgConnection, nome: &str) -> Result<Uuid> {
    sqlx::query_scalar::<_, Uuid>("SELECT id FROM categorias WHERE nome = $1 FOR SHARE")
        .bind(nome)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| StorageError::CategoryNotFound(nome.to_string()))
}
