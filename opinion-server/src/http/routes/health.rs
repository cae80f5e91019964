//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db;
use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

impl HealthResponse {
    fn from_ping(result: &Result<(), sqlx::Error>) -> (StatusCode, Self) {
        let (code, status, database) = match result {
            Ok(()) => (StatusCode::OK, "ok", "ok"),
            Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unreachable"),
        };
        (
            code,
            Self {
                status,
                version: env!("CARGO_PKG_VERSION"),
                database,
            },
        )
    }
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let result = db::ping(&state.pool).await;
    if let Err(e) = &result {
        tracing::warn!(error = %e, "health check could not reach database");
    }
    let (code, body) = HealthResponse::from_ping(&result);
    (code, Json(body))
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_database_is_ok() {
        let (code, body) = HealthResponse::from_ping(&Ok(()));
        assert_eq!(code, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.database, "ok");
    }

    #[test]
    fn unreachable_database_is_503() {
        let (code, body) = HealthResponse::from_ping(&Err(sqlx::Error::PoolTimedOut));
        assert_eq!(code, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "degraded");
        assert_eq!(body.database, "unreachable");
    }
}
