//! Unified error handling for HTTP.
//!
//! Every failure is rendered as a single JSON object of the form
//! `{"error": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{MSG_DB_CONNECTION_ERROR, MSG_ROUTE_NOT_FOUND};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    /// No database connection could be obtained
    #[error("Database connection unavailable: {0}")]
    ConnectionUnavailable(String),

    /// Query execution or row decoding failed
    #[error("{0}")]
    Query(String),

    /// Lookup matched no row
    #[error("{0}")]
    NotFound(String),

    /// Startup or wiring failure
    #[error("{0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl AppError {
    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ConnectionUnavailable(_) => "DB_CONNECTION_ERROR",
            AppError::Query(_) => "QUERY_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message.
    ///
    /// Connection details stay in the server log. Query errors are passed
    /// through verbatim to the client.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ConnectionUnavailable(detail) => {
                tracing::error!("{}: {}", MSG_DB_CONNECTION_ERROR, detail);
                MSG_DB_CONNECTION_ERROR.to_string()
            }
            AppError::Query(msg) => {
                tracing::error!("Query error: {}", msg);
                msg.clone()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                msg.clone()
            }
            AppError::NotFound(msg) => msg.clone(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(code = self.code(), status = status.as_u16(), "request failed");
        let body = ErrorResponse::new(self.user_message());

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Database Error Conversion
// =============================================================================

#[cfg(feature = "database")]
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        use sea_orm::DbErr;

        match err {
            DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
                AppError::ConnectionUnavailable(err.to_string())
            }
            other => AppError::Query(other.to_string()),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(message.to_string()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    /// Not-found error for unknown routes
    pub fn route_not_found() -> Self {
        AppError::NotFound(MSG_ROUTE_NOT_FOUND.to_string())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: AppError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_connection_error_hides_detail() {
        let (status, body) =
            body_of(AppError::ConnectionUnavailable("connection refused".into())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, MSG_DB_CONNECTION_ERROR);
    }

    #[tokio::test]
    async fn test_query_error_exposes_text() {
        let (status, body) =
            body_of(AppError::Query("relation \"users\" does not exist".into())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "relation \"users\" does not exist");
    }

    #[tokio::test]
    async fn test_not_found_is_404() {
        let (status, body) = body_of(AppError::not_found("Utilizador não encontrado")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Utilizador não encontrado");
    }

    #[test]
    fn test_option_ext() {
        let missing: Option<i32> = None;
        let err = missing.ok_or_not_found("gone").unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref m) if m == "gone"));
        assert_eq!(Some(3).ok_or_not_found("gone").unwrap(), 3);
    }

    #[cfg(feature = "database")]
    #[test]
    fn test_db_error_classification() {
        use sea_orm::{ConnAcquireErr, DbErr};

        let acquire = AppError::from(DbErr::ConnectionAcquire(ConnAcquireErr::Timeout));
        assert!(matches!(acquire, AppError::ConnectionUnavailable(_)));

        let decode = AppError::from(DbErr::Type("unexpected NULL in column nome".into()));
        assert!(matches!(decode, AppError::Query(ref m) if m.contains("unexpected NULL")));
    }
}
