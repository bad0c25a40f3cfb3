use crate::config::Config;
use crate::store::MemoryStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: MemoryStore,
    pub config: Arc<Config>,
}

impl AppState {
    /// State backed by a freshly seeded store
    pub fn new(config: Config) -> Self {
        Self {
            store: MemoryStore::seeded(),
            config: Arc::new(config),
        }
    }
}
