//! Course handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use common::AppResult;
use domain::Course;

use crate::state::AppState;

/// Create course routes
pub fn course_routes() -> Router<AppState> {
    Router::new().route("/", get(list_courses))
}

/// List all courses
#[utoipa::path(
    get,
    path = "/cursos",
    tag = "Courses",
    responses(
        (status = 200, description = "All courses ordered by identifier", body = Vec<Course>),
        (status = 500, description = "Database error", body = common::ErrorResponse)
    )
)]
pub async fn list_courses(State(state): State<AppState>) -> AppResult<Json<Vec<Course>>> {
    let courses = state.school_service.list_courses().await?;
    Ok(Json(courses))
}
