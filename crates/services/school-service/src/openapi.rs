//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};
use crate::handlers::root_handler::{EndpointMap, WelcomeResponse};
use common::ErrorResponse;
use domain::{Course, CourseEnrollments, EnrollmentEntry, User};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "School API",
        description = "Read-only access to users, courses and enrollments",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        crate::handlers::root_handler::root,
        crate::handlers::health_handler::health_check,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::course_handler::list_courses,
        crate::handlers::enrollment_handler::course_enrollments,
    ),
    components(
        schemas(
            User,
            Course,
            EnrollmentEntry,
            CourseEnrollments,
            ErrorResponse,
            WelcomeResponse,
            EndpointMap,
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
        )
    ),
    tags(
        (name = "Root", description = "Welcome page"),
        (name = "Health", description = "Service health"),
        (name = "Users", description = "School users"),
        (name = "Courses", description = "Courses on offer"),
        (name = "Enrollments", description = "Students enrolled per course"),
    )
)]
pub struct ApiDoc;
