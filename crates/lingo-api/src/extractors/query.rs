//! Query string extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use lingo_service::ReadHistoryQuery;

use crate::response::ApiError;

/// Optional `?limit=N` for read history; clamping happens in the service
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadLimit(pub Option<i64>);

#[async_trait]
impl<S> FromRequestParts<S> for ReadLimit
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ReadHistoryQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(ReadLimit(params.limit))
    }
}
