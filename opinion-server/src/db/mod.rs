//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Connection pool shared through AppState - no Arc<Mutex<Connection>>
//! - All list operations use LEFT JOINs - no N+1 queries
//! - One read-only transaction per request, released on every exit path

pub mod pool;
pub mod repos;

pub use pool::{begin_read_only, create_pool, ping, DatabaseTarget, PoolSettings};
pub use repos::*;
