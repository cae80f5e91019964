//! Opinion endpoints - comments, surveys, web reviews

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::db::repos::{CommentRepo, ReviewRepo, SurveyRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidPagination;
use crate::http::server::AppState;
use crate::models::{Comment, Survey, WebReview};

/// GET /comentarios - social comments with customer, product and source
#[instrument(skip_all, fields(skip = page.offset(), limit = page.limit()))]
async fn list_comments(
    State(state): State<Arc<AppState>>,
    ValidPagination(page): ValidPagination,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let comments = CommentRepo::new(&state.pool).list(page).await?;
    Ok(Json(comments))
}

/// GET /encuestas - survey responses with customer, product and classification
#[instrument(skip_all, fields(skip = page.offset(), limit = page.limit()))]
async fn list_surveys(
    State(state): State<Arc<AppState>>,
    ValidPagination(page): ValidPagination,
) -> Result<Json<Vec<Survey>>, ApiError> {
    let surveys = SurveyRepo::new(&state.pool).list(page).await?;
    Ok(Json(surveys))
}

/// GET /reviews - web reviews with customer and product
#[instrument(skip_all, fields(skip = page.offset(), limit = page.limit()))]
async fn list_reviews(
    State(state): State<Arc<AppState>>,
    ValidPagination(page): ValidPagination,
) -> Result<Json<Vec<WebReview>>, ApiError> {
    let reviews = ReviewRepo::new(&state.pool).list(page).await?;
    Ok(Json(reviews))
}

/// Opinion routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/comentarios", get(list_comments))
        .route("/encuestas", get(list_surveys))
        .route("/reviews", get(list_reviews))
}
