//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One query per list operation, reference tables LEFT JOINed (no N+1)
//! - Ordered by primary key so pages are stable
//! - Runs inside a read-only transaction; nothing here ever writes

pub mod comments;
pub mod customers;
pub mod products;
pub mod reviews;
pub mod sources;
pub mod surveys;

pub use comments::{CommentRepo, CommentRow};
pub use customers::{CustomerRepo, CustomerRow};
pub use products::{ProductRepo, ProductRow};
pub use reviews::{ReviewRepo, ReviewRow};
pub use sources::{SourceRepo, SourceRow};
pub use surveys::{SurveyRepo, SurveyRow};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
