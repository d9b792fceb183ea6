//! Enrollment handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use common::AppResult;
use domain::CourseEnrollments;

use crate::extractors::IdPath;
use crate::state::AppState;

/// Create enrollment routes
pub fn enrollment_routes() -> Router<AppState> {
    Router::new().route("/:curso_id", get(course_enrollments))
}

/// Students enrolled in a course
///
/// An unknown course answers 200 with an empty list.
#[utoipa::path(
    get,
    path = "/matriculas/{curso_id}",
    tag = "Enrollments",
    params(
        ("curso_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Enrolled students ordered by name", body = CourseEnrollments),
        (status = 500, description = "Database error", body = common::ErrorResponse)
    )
)]
pub async fn course_enrollments(
    State(state): State<AppState>,
    IdPath(curso_id): IdPath,
) -> AppResult<Json<CourseEnrollments>> {
    let enrollments = state.school_service.course_enrollments(curso_id).await?;
    Ok(Json(enrollments))
}
