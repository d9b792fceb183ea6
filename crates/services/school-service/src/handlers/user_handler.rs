//! User handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use common::AppResult;
use domain::User;

use crate::extractors::IdPath;
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", get(get_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users ordered by identifier", body = Vec<User>),
        (status = 500, description = "Database error", body = common::ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.school_service.list_users().await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = User),
        (status = 404, description = "User not found", body = common::ErrorResponse),
        (status = 500, description = "Database error", body = common::ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<User>> {
    let user = state.school_service.get_user(id).await?;
    Ok(Json(user))
}
