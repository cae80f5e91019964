//! Custom Axum extractors

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{Pagination, PaginationParams, ValidationError};

/// Extract and validate `skip`/`limit` from the query string.
///
/// Rejects with a 400 before the handler runs, so an invalid page never
/// acquires a database connection.
#[derive(Debug, Clone, Copy)]
pub struct ValidPagination(pub Pagination);

impl<S> FromRequestParts<S> for ValidPagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<PaginationParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::MalformedQuery {
                    reason: rejection.body_text(),
                })
            })?;

        let page = Pagination::try_from(params)?;
        Ok(Self(page))
    }
}
