//! Application state for the HTTP server.

use std::sync::Arc;

use crate::dataset::EclipseRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Dataset repository, built once at startup
    pub repository: Arc<dyn EclipseRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn EclipseRepository>) -> Self {
        Self { repository }
    }
}
