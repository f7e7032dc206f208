use std::sync::Arc;

use crate::config::Config;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// In-memory calculator sessions, one `SelectionState` per page session.
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sessions: Arc::new(SessionStore::new()),
        }
    }
}
