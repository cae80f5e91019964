//! Offset/limit pagination for list endpoints

use serde::Deserialize;

use super::ValidationError;

/// Maximum rows per page
pub const MAX_LIMIT: i64 = 1000;

/// Default rows per page
pub const DEFAULT_LIMIT: i64 = 100;

/// Validated pagination window.
///
/// Construction rejects out-of-range values instead of clamping them, so a
/// `Pagination` that exists is always safe to bind into a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    skip: i64,
    limit: i64,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// - `skip` must be >= 0
    /// - `limit` must be in 1..=1000
    pub fn new(skip: i64, limit: i64) -> Result<Self, ValidationError> {
        if skip < 0 {
            return Err(ValidationError::OutOfRange {
                field: "skip",
                min: 0,
                max: None,
            });
        }

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(ValidationError::OutOfRange {
                field: "limit",
                min: 1,
                max: Some(MAX_LIMIT),
            });
        }

        Ok(Self { skip, limit })
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        self.skip
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Raw query parameters for pagination.
///
/// Kept as strings so that a non-numeric value can be reported against the
/// field it came from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<String>,
    pub limit: Option<String>,
}

impl TryFrom<PaginationParams> for Pagination {
    type Error = ValidationError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        let skip = parse_param("skip", params.skip.as_deref())?.unwrap_or(0);
        let limit = parse_param("limit", params.limit.as_deref())?.unwrap_or(DEFAULT_LIMIT);
        Self::new(skip, limit)
    }
}

fn parse_param(field: &'static str, raw: Option<&str>) -> Result<Option<i64>, ValidationError> {
    raw.map(|value| {
        value
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::NotAnInteger {
                field,
                value: value.to_owned(),
            })
    })
    .transpose()
}
