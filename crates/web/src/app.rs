use axum::{Router, routing::get};
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features::{athletes, categories, health, training_centers};

#[derive(OpenApi)]
#[openapi(
    paths(
        categories::handlers::create_category,
        training_centers::handlers::list_training_centers,
        training_centers::handlers::get_training_center,
        training_centers::handlers::create_training_center,
        athletes::handlers::list_athletes,
        athletes::handlers::get_athlete,
        athletes::handlers::create_athlete,
        athletes::handlers::update_athlete,
        athletes::handlers::delete_athlete,
        health::health_check,
    ),
    components(
        schemas(
            storage::dto::category::CategoryIn,
            storage::dto::category::CategoryOut,
            storage::dto::category::CategoryRef,
            storage::dto::training_center::TrainingCenterIn,
            storage::dto::training_center::TrainingCenterOut,
            storage::dto::training_center::TrainingCenterRef,
            storage::dto::athlete::AthleteIn,
            storage::dto::athlete::AthleteOut,
            storage::dto::athlete::AthleteUpdate,
        )
    ),
    tags(
        (name = "categorias", description = "Athlete categories"),
        (name = "centros", description = "Training centers"),
        (name = "atletas", description = "Athletes"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

pub fn router(db: Database) -> Router {
    Router::new()
        .nest("/categorias", categories::routes())
        .nest("/centros", training_centers::routes())
        .nest("/atletas", athletes::routes())
        .route("/health", get(health::health_check))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}
