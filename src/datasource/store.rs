//! Storage abstraction for the connection directory.
//!
//! Handlers only ever see `Arc<dyn ConnectionStore>`, so the in-memory
//! backend can later be swapped for a persistent one without touching the
//! HTTP layer.

use async_trait::async_trait;
use serde::Serialize;

use super::timestamp::SyncTimestamp;
use super::types::{Connection, DirectoryResult, SyncState, SyncUpdate};

/// Aggregate counts over the stored connections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryStats {
    pub total: usize,
    pub synced: usize,
    pub never_synced: usize,
}

impl DirectoryStats {
    pub fn from_connections(connections: &[Connection]) -> Self {
        let synced = connections
            .iter()
            .filter(|c| c.sync_state() == SyncState::Synced)
            .count();

        Self {
            total: connections.len(),
            synced,
            never_synced: connections.len() - synced,
        }
    }
}

/// Backend trait for connection storage.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; a single instance is shared by
/// every request handler. Updating `lastSyncAt` must be atomic per record.
#[async_trait]
pub trait ConnectionStore: Send + Sync {
    /// Backend type identifier (e.g. `"memory"`)
    fn backend_name(&self) -> &'static str;

    /// All connections in seed order.
    async fn list(&self) -> Vec<Connection>;

    /// A single connection by id.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if no connection has this id.
    async fn get(&self, id: &str) -> DirectoryResult<Connection>;

    /// Overwrite `lastSyncAt` on one connection. Last write wins; no
    /// ordering check is made against the previous value.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if no connection has this id, in
    /// which case nothing is modified.
    async fn update_last_sync(
        &self,
        id: &str,
        timestamp: SyncTimestamp,
    ) -> DirectoryResult<SyncUpdate>;

    /// Number of stored connections.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn stats(&self) -> DirectoryStats {
        DirectoryStats::from_connections(&self.list().await)
    }
}
