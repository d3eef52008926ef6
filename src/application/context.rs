use crate::infrastructure::db::repositories::Repositories;

/// Shared application resources used by use cases and HTTP handlers.
pub struct AppContext {
    pub repos: Repositories,
}

impl AppContext {
    /// Build a new application context with shared repositories.
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }
}
