//! Organization datasource connection directory.
//!
//! This module provides:
//! - The `Connection` record and its JSON wire shape
//! - `SyncTimestamp`, the single canonical form of `lastSyncAt`
//! - The `ConnectionStore` trait and its in-memory implementation
//! - Built-in and file-based fixture loading
//!
//! # Example
//!
//! ```ignore
//! let store = MemoryConnectionStore::seeded()?;
//!
//! let all = store.list().await;
//! let one = store.get("conn_001").await?;
//!
//! let update = store
//!     .update_last_sync("conn_001", SyncTimestamp::parse("2026-02-16T08:30:00Z")?)
//!     .await?;
//! assert_eq!(update.last_sync_at.as_str(), "2026-02-16T08:30:00+00:00");
//! ```

mod factory;
mod fixtures;
mod memory_store;
mod store;
mod timestamp;
mod types;

pub use factory::create_connection_store;
pub use fixtures::{builtin_connections, load_fixture_file, parse_fixtures};
pub use memory_store::MemoryConnectionStore;
pub use store::{ConnectionStore, DirectoryStats};
pub use timestamp::{SyncTimestamp, TimestampError};
pub use types::{
    Connection, Credentials, DirectoryError, DirectoryResult, FoundryConfig, SyncState, SyncUpdate,
    UpdateLastSyncRequest, LAST_SYNC_UPDATED_MESSAGE,
};
