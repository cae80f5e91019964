//! Request parameters and response records
//!
//! Pagination input is validated when constructed; invalid input returns
//! ValidationError, not panic.

pub mod pagination;
pub mod records;
pub mod validation;

pub use pagination::{Pagination, PaginationParams, DEFAULT_LIMIT, MAX_LIMIT};
pub use records::{
    Classification, Comment, Customer, Product, ProductRef, Source, Survey, WebReview,
};
pub use validation::ValidationError;
