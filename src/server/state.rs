use std::sync::Arc;
use std::time::Instant;

use crate::config::Settings;
use crate::datasource::{create_connection_store, ConnectionStore, DirectoryResult};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub store: Arc<dyn ConnectionStore>,
    pub start_time: Instant,
}

impl AppState {
    /// Build the state with the store described by `settings.store`.
    pub fn new(settings: Settings) -> DirectoryResult<Self> {
        let store = create_connection_store(&settings.store)?;
        Ok(Self::with_store(settings, store))
    }

    /// Build the state around an existing store.
    pub fn with_store(settings: Settings, store: Arc<dyn ConnectionStore>) -> Self {
        Self {
            settings: Arc::new(settings),
            store,
            start_time: Instant::now(),
        }
    }
}
