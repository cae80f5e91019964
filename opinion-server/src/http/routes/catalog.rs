//! Reference table endpoints - customers, products, sources

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::db::repos::{CustomerRepo, ProductRepo, SourceRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidPagination;
use crate::http::server::AppState;
use crate::models::{Customer, Product, Source};

/// GET /clientes - customers with pagination
#[instrument(skip_all, fields(skip = page.offset(), limit = page.limit()))]
async fn list_customers(
    State(state): State<Arc<AppState>>,
    ValidPagination(page): ValidPagination,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = CustomerRepo::new(&state.pool).list(page).await?;
    Ok(Json(customers))
}

/// GET /productos - products with pagination
#[instrument(skip_all, fields(skip = page.offset(), limit = page.limit()))]
async fn list_products(
    State(state): State<Arc<AppState>>,
    ValidPagination(page): ValidPagination,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = ProductRepo::new(&state.pool).list(page).await?;
    Ok(Json(products))
}

/// GET /fuentes - every source, unpaginated
#[instrument(skip_all)]
async fn list_sources(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Source>>, ApiError> {
    let sources = SourceRepo::new(&state.pool).list_all().await?;
    Ok(Json(sources))
}

/// Catalog routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/clientes", get(list_customers))
        .route("/productos", get(list_products))
        .route("/fuentes", get(list_sources))
}
