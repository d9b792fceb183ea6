//! Repository layer for data access.

pub mod rows;
mod school_repository;

#[cfg(any(test, feature = "test-utils"))]
pub use school_repository::MockSchoolRepository;
pub use school_repository::{PgSchoolStore, SchoolRepository};
