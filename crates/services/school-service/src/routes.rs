//! Route configuration.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::AppError;

use crate::handlers::{course_routes, enrollment_routes, health_routes, root, user_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Welcome page
        .route("/", get(root))
        // Health check
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Data routes
        .nest("/users", user_routes())
        .nest("/cursos", course_routes())
        .nest("/matriculas", enrollment_routes())
        .fallback(fallback)
        .with_state(state)
}

/// JSON 404 for unknown routes
async fn fallback() -> AppError {
    AppError::route_not_found()
}
