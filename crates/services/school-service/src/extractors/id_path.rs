//! Integer path parameter extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use common::AppError;

/// Non-negative integer identifier taken from the request path.
///
/// Segments that are not a non-negative integer fitting in `i32` do not
/// match the route and are answered with a JSON 404.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<u32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Path rejected: {}", rejection.body_text());
                AppError::route_not_found()
            })?;

        i32::try_from(raw)
            .map(IdPath)
            .map_err(|_| AppError::route_not_found())
    }
}
