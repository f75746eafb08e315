use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::athlete::{AthleteIn, AthleteUpdate};
use crate::error::{Result, StorageError};
use crate::models::Athlete;
use crate::repository::{category, training_center};

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all athletes
    pub async fn list(&self) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, created_at, nome, cpf, idade, peso, altura, sexo,
                   categoria_id, centro_treinamento_id
            FROM atletas
            ORDER BY created_at, nome
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, created_at, nome, cpf, idade, peso, altura, sexo,
                   categoria_id, centro_treinamento_id
            FROM atletas
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Create a new athlete.
    ///
    /// The category and training center names are resolved and the row is
    /// inserted in a single transaction. Fails with `CategoryNotFound` or
    /// `TrainingCenterNotFound` when a reference does not exist, and with
    /// `ConstraintViolation` when the CPF is already registered.
    pub async fn create(&self, req: &AthleteIn) -> Result<Athlete> {
        let mut tx = self.pool.begin().await?;

        let categoria_id = category::resolve_id(&mut tx, &req.categoria.nome).await?;
        let centro_treinamento_id =
            training_center::resolve_id(&mut tx, &req.centro_treinamento.nome).await?;

        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            INSERT INTO atletas (id, created_at, nome, cpf, idade, peso, altura, sexo,
                                 categoria_id, centro_treinamento_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, created_at, nome, cpf, idade, peso, altura, sexo,
                      categoria_id, centro_treinamento_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(Utc::now().naive_utc())
        .bind(&req.nome)
        .bind(&req.cpf)
        .bind(req.idade)
        .bind(req.peso)
        .bind(req.altura)
        .bind(&req.sexo)
        .bind(categoria_id)
        .bind(centro_treinamento_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| classify_insert_error(StorageError::from(e), req))?;

        tx.commit().await?;

        Ok(athlete)
    }

    /// Apply a partial update and return the row as stored after the write.
    pub async fn update(&self, id: Uuid, req: &AthleteUpdate) -> Result<Athlete> {
        if req.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut tx = self.pool.begin().await?;

        let mut athlete = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, created_at, nome, cpf, idade, peso, altura, sexo,
                   categoria_id, centro_treinamento_id
            FROM atletas
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        req.apply_to(&mut athlete);

        let updated = sqlx::query_as::<_, Athlete>(
            r#"
            UPDATE atletas
            SET nome = $2,
                idade = $3
            WHERE id = $1
            RETURNING id, created_at, nome, cpf, idade, peso, altura, sexo,
                      categoria_id, centro_treinamento_id
            "#,
        )
        .bind(id)
        .bind(&athlete.nome)
        .bind(athlete.idade)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        tx.commit().await?;

        Ok(updated)
    }

    /// Delete an athlete by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM atletas WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

fn classify_insert_error(error: StorageError, req: &AthleteIn) -> StorageError {
    if error.is_unique_violation() && error.constraint() == Some("atletas_cpf_key") {
        return StorageError::ConstraintViolation(format!(
            "An athlete with CPF {} already exists",
            req.cpf
        ));
    }

    // Only reachable if a referenced row disappeared despite the share lock.
    if error.is_foreign_key_violation() {
        return match error.constraint() {
            Some("atletas_centro_treinamento_id_fkey") => {
                StorageError::TrainingCenterNotFound(req.centro_treinamento.nome.clone())
            }
            _ => StorageError::CategoryNotFound(req.categoria.nome.clone()),
        };
    }

    error
}
