//! Seed data for the connection directory

use std::path::Path;

use super::timestamp::SyncTimestamp;
use super::types::{Connection, Credentials, DirectoryError, DirectoryResult, FoundryConfig};

/// The fixture set loaded when no fixture file is configured.
pub fn builtin_connections() -> DirectoryResult<Vec<Connection>> {
    let conn_002_synced_at = SyncTimestamp::parse("2026-02-16T08:30:00+00:00")
        .map_err(|e| DirectoryError::InvalidFixture(format!("conn_002: {}", e)))?;

    Ok(vec![
        Connection {
            id: "conn_001".to_string(),
            credentials: Credentials {
                app_name: "CheraCare Portal".to_string(),
                app_secret: "sk-9f8e7d6c5b4a3210-dead-beef-cafe".to_string(),
                app_key: "ak-1234-5678-abcd-efgh".to_string(),
                base_url: "https://api.cheracare.example.com/v1".to_string(),
            },
            foundry_config: FoundryConfig {
                profiles_dataset_rid:
                    "ri.foundry.main.dataset.aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee".to_string(),
                visits_dataset_rid:
                    "ri.foundry.main.dataset.11111111-2222-3333-4444-555555555555".to_string(),
            },
            last_sync_at: None,
        },
        Connection {
            id: "conn_002".to_string(),
            credentials: Credentials {
                app_name: "CheraCare Mobile".to_string(),
                app_secret: "sk-0123abcd4567efgh-8901-ijkl-mnop".to_string(),
                app_key: "ak-wxyz-9876-lmno-pqrs".to_string(),
                base_url: "https://mobile-api.cheracare.example.com/v2".to_string(),
            },
            foundry_config: FoundryConfig {
                profiles_dataset_rid:
                    "ri.foundry.main.dataset.ffffffff-0000-1111-2222-333333333333".to_string(),
                visits_dataset_rid:
                    "ri.foundry.main.dataset.66666666-7777-8888-9999-aaaaaaaaaaaa".to_string(),
            },
            last_sync_at: Some(conn_002_synced_at),
        },
    ])
}

/// Parse a JSON array of connections.
///
/// Both camelCase and legacy snake_case field names are accepted, and any
/// seeded `lastSyncAt` is normalized on the way in.
pub fn parse_fixtures(json: &str) -> DirectoryResult<Vec<Connection>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a fixture file.
pub fn load_fixture_file(path: impl AsRef<Path>) -> DirectoryResult<Vec<Connection>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let connections = parse_fixtures(&contents)?;

    tracing::info!(
        path = %path.display(),
        count = connections.len(),
        "Loaded connection fixtures"
    );

    Ok(connections)
}
