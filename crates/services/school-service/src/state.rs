//! Application state for dependency injection.

use std::sync::Arc;

use crate::service::SchoolService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub school_service: Arc<dyn SchoolService>,
}

impl AppState {
    /// Create new app state.
    pub fn new(school_service: Arc<dyn SchoolService>) -> Self {
        Self { school_service }
    }
}
