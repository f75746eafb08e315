use sqlx::PgPool;
use storage::{
    dto::category::CategoryIn, error::Result, models::Category,
    repository::category::CategoryRepository,
};

/// Create a new category
pub async fn create_category(pool: &PgPool, request: &CategoryIn) -> Result<Category> {
    let repo = CategoryRepository::new(pool);
    let category = repo.create(request).await?;

    tracing::info!(category_id = %category.id, nome = %category.nome, "Category created");

    Ok(category)
}
