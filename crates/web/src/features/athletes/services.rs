use sqlx::PgPool;
use storage::{
    dto::athlete::{AthleteIn, AthleteUpdate},
    error::Result,
    models::Athlete,
    repository::athlete::AthleteRepository,
};
use uuid::Uuid;

/// List all athletes
pub async fn list_athletes(pool: &PgPool) -> Result<Vec<Athlete>> {
    let repo = AthleteRepository::new(pool);
    repo.list().await
}

/// Get athlete by ID
pub async fn get_athlete(pool: &PgPool, id: Uuid) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new athlete, resolving its category and training center by name
pub async fn create_athlete(pool: &PgPool, request: &AthleteIn) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    let athlete = repo.create(request).await.inspect_err(|e| {
        tracing::warn!(
            categoria = %request.categoria.nome,
            centro_treinamento = %request.centro_treinamento.nome,
            "Athlete creation failed: {}",
            e
        )
    })?;

    tracing::info!(athlete_id = %athlete.id, "Athlete created");

    Ok(athlete)
}

/// Update an athlete's name and/or age
pub async fn update_athlete(pool: &PgPool, id: Uuid, request: &AthleteUpdate) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    let athlete = repo.update(id, request).await?;

    tracing::info!(athlete_id = %athlete.id, "Athlete updated");

    Ok(athlete)
}

/// Delete an athlete
pub async fn delete_athlete(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = AthleteRepository::new(pool);
    repo.delete(id).await?;

    tracing::info!(athlete_id = %id, "Athlete deleted");

    Ok(())
}
