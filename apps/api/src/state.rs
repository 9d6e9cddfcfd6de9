use std::sync::Arc;

use crate::auth::sessions::SessionStore;
use crate::catalog::Catalog;
use crate::llm_client::CompletionModel;
use crate::participation::inbox::Inbox;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Fixed event directory, read-only after startup.
    pub catalog: Arc<Catalog>,
    pub sessions: SessionStore,
    pub inbox: Inbox,
    /// Recommendation backend. Default: `LlmClient`.
    pub model: Arc<dyn CompletionModel>,
}

impl AppState {
    pub fn new(catalog: Catalog, model: Arc<dyn CompletionModel>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions: SessionStore::default(),
            inbox: Inbox::default(),
            model,
        }
    }
}
