//! opinion-server: read-only reporting API over the OpinionDB store
//!
//! Exposes customers, products, sources, social comments, surveys and web
//! reviews as paginated JSON lists. Every list is a single query with its
//! reference tables LEFT JOINed, run in a read-only transaction.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DatabaseTarget, DbError, PoolSettings};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
