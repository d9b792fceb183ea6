//! Root endpoint - welcome message and endpoint map.

use axum::response::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use domain::{DESC_COURSES, DESC_ENROLLMENTS, DESC_USERS, DESC_USER_BY_ID, MSG_WELCOME};

/// Welcome document served at `/`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
    pub endpoints: EndpointMap,
}

/// Human-readable description of each data route.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EndpointMap {
    #[serde(rename = "/users")]
    pub users: String,
    #[serde(rename = "/users/<id>")]
    pub user_by_id: String,
    #[serde(rename = "/cursos")]
    pub courses: String,
    #[serde(rename = "/matriculas/<curso_id>")]
    pub enrollments: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: MSG_WELCOME.to_string(),
            endpoints: EndpointMap {
                users: DESC_USERS.to_string(),
                user_by_id: DESC_USER_BY_ID.to_string(),
                courses: DESC_COURSES.to_string(),
                enrollments: DESC_ENROLLMENTS.to_string(),
            },
        }
    }
}

/// API welcome page
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Welcome message and endpoint map", body = WelcomeResponse)
    )
)]
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::default())
}
