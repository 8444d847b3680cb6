//! In-memory connection store using DashMap.
//!
//! Records live only for the lifetime of the process. The set of ids is
//! fixed at construction; only `lastSyncAt` changes afterwards.

use async_trait::async_trait;
use dashmap::DashMap;

use super::fixtures::builtin_connections;
use super::store::ConnectionStore;
use super::timestamp::SyncTimestamp;
use super::types::{Connection, DirectoryError, DirectoryResult, SyncUpdate};

/// In-memory connection store.
///
/// `DashMap` gives per-shard locking, so an update holds a write guard on
/// exactly one record for the duration of a single field assignment.
/// Listing order comes from `order`, which is never mutated after seeding.
pub struct MemoryConnectionStore {
    /// Connections keyed by id
    connections: DashMap<String, Connection>,
    /// Ids in seed order
    order: Vec<String>,
}

impl Default for MemoryConnectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryConnectionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a store seeded with the given connections, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidFixture` if an id is empty or repeated.
    pub fn with_connections(connections: Vec<Connection>) -> DirectoryResult<Self> {
        let map = DashMap::with_capacity(connections.len());
        let mut order = Vec::with_capacity(connections.len());

        for connection in connections {
            if connection.id.trim().is_empty() {
                return Err(DirectoryError::InvalidFixture(
                    "connection id must not be empty".to_string(),
                ));
            }

            if map.contains_key(&connection.id) {
                return Err(DirectoryError::InvalidFixture(format!(
                    "duplicate connection id '{}'",
                    connection.id
                )));
            }

            order.push(connection.id.clone());
            map.insert(connection.id.clone(), connection);
        }

        Ok(Self {
            connections: map,
            order,
        })
    }

    /// Create a store seeded with the built-in fixture set
    pub fn seeded() -> DirectoryResult<Self> {
        Self::with_connections(builtin_connections()?)
    }
}

#[async_trait]
impl ConnectionStore for MemoryConnectionStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> Vec<Connection> {
        self.order
            .iter()
            .filter_map(|id| self.connections.get(id).map(|entry| entry.value().clone()))
            .collect()
    }

    async fn get(&self, id: &str) -> DirectoryResult<Connection> {
        self.connections
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DirectoryError::NotFound(id.to_string()))
    }

    async fn update_last_sync(
        &self,
        id: &str,
        timestamp: SyncTimestamp,
    ) -> DirectoryResult<SyncUpdate> {
        let mut entry = self
            .connections
            .get_mut(id)
            .ok_or_else(|| DirectoryError::NotFound(id.to_string()))?;

        let previous = entry.last_sync_at.replace(timestamp.clone());

        tracing::debug!(
            connection_id = %id,
            previous = ?previous.as_ref().map(SyncTimestamp::as_str),
            last_sync_at = %timestamp,
            "lastSyncAt updated"
        );

        Ok(SyncUpdate::new(id, timestamp))
    }

    async fn len(&self) -> usize {
        self.connections.len()
    }
}
