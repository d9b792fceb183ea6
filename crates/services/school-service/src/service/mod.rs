//! Service layer - school use cases.

mod school_service;

pub use school_service::{SchoolManager, SchoolService};
