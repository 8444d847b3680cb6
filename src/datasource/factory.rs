//! Connection store factory

use std::sync::Arc;

use crate::config::StoreConfig;

use super::fixtures::{builtin_connections, load_fixture_file};
use super::memory_store::MemoryConnectionStore;
use super::store::ConnectionStore;
use super::types::DirectoryResult;

/// Create a connection store based on configuration.
///
/// Seed data comes from `fixtures_path` when set, otherwise from the
/// built-in fixture set. Only the `"memory"` backend exists; any other name
/// logs a warning and falls back to it.
///
/// # Errors
///
/// Fails if the fixture file cannot be read or decoded, or if it contains
/// empty or duplicate ids.
pub fn create_connection_store(settings: &StoreConfig) -> DirectoryResult<Arc<dyn ConnectionStore>> {
    let connections = match settings.fixtures_path.as_deref() {
        Some(path) => load_fixture_file(path)?,
        None => builtin_connections()?,
    };

    if settings.backend != "memory" {
        tracing::warn!(
            backend = %settings.backend,
            "Unknown connection store backend, falling back to memory"
        );
    }

    let count = connections.len();
    let store = MemoryConnectionStore::with_connections(connections)?;
    tracing::info!(
        backend = "memory",
        connections = count,
        "Creating memory connection store"
    );

    Ok(Arc::new(store))
}
