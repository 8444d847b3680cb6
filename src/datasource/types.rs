//! Connection records and directory error definitions

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::timestamp::SyncTimestamp;

/// Message returned after a successful `lastSyncAt` update
pub const LAST_SYNC_UPDATED_MESSAGE: &str = "lastSyncAt updated successfully";

/// Directory-specific error type
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Connection '{0}' not found.")]
    NotFound(String),

    #[error("Invalid fixture data: {0}")]
    InvalidFixture(String),

    #[error("Failed to read fixture file: {0}")]
    FixtureIo(#[from] std::io::Error),

    #[error("Failed to decode fixture file: {0}")]
    FixtureFormat(#[from] serde_json::Error),
}

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Credentials of the upstream application. Opaque to this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "AppName")]
    pub app_name: String,

    #[serde(rename = "AppSecret")]
    pub app_secret: String,

    #[serde(rename = "AppKey")]
    pub app_key: String,

    #[serde(rename = "BaseURL")]
    pub base_url: String,
}

/// Foundry dataset identifiers. Opaque to this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundryConfig {
    #[serde(alias = "profiles_dataset_rid")]
    pub profiles_dataset_rid: String,

    #[serde(alias = "visits_dataset_rid")]
    pub visits_dataset_rid: String,
}

/// An organization datasource connection.
///
/// Serialized with camelCase envelope keys. The snake_case spellings found
/// in older fixture files are accepted on input only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// Unique, stable identifier; also the store key
    pub id: String,

    pub credentials: Credentials,

    #[serde(alias = "foundry_config")]
    pub foundry_config: FoundryConfig,

    /// Most recent successful sync, `None` if never synced
    #[serde(default, alias = "last_sync_at")]
    pub last_sync_at: Option<SyncTimestamp>,
}

/// Logical sync state of a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    NeverSynced,
    Synced,
}

impl Connection {
    pub fn sync_state(&self) -> SyncState {
        match self.last_sync_at {
            Some(_) => SyncState::Synced,
            None => SyncState::NeverSynced,
        }
    }
}

/// Result of a successful `lastSyncAt` update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncUpdate {
    pub id: String,
    pub last_sync_at: SyncTimestamp,
    pub message: String,
}

impl SyncUpdate {
    pub fn new(id: impl Into<String>, last_sync_at: SyncTimestamp) -> Self {
        Self {
            id: id.into(),
            last_sync_at,
            message: LAST_SYNC_UPDATED_MESSAGE.to_string(),
        }
    }
}

/// PATCH request body.
///
/// `lastSyncAt` is kept as raw JSON so that a missing field and a value of
/// the wrong type can be reported separately.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLastSyncRequest {
    #[serde(default, alias = "last_sync_at")]
    pub last_sync_at: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Connection {
        Connection {
            id: "conn_test".to_string(),
            credentials: Credentials {
                app_name: "Portal".to_string(),
                app_secret: "secret".to_string(),
                app_key: "key".to_string(),
                base_url: "https://api.example.com".to_string(),
            },
            foundry_config: FoundryConfig {
                profiles_dataset_rid: "ri.profiles".to_string(),
                visits_dataset_rid: "ri.visits".to_string(),
            },
            last_sync_at: None,
        }
    }

    #[test]
    fn test_connection_wire_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "conn_test",
                "credentials": {
                    "AppName": "Portal",
                    "AppSecret": "secret",
                    "AppKey": "key",
                    "BaseURL": "https://api.example.com"
                },
                "foundryConfig": {
                    "profilesDatasetRid": "ri.profiles",
                    "visitsDatasetRid": "ri.visits"
                },
                "lastSyncAt": null
            })
        );
    }

    #[test]
    fn test_legacy_field_names_are_accepted() {
        let connection: Connection = serde_json::from_value(json!({
            "id": "conn_legacy",
            "credentials": {
                "AppName": "a",
                "AppSecret": "b",
                "AppKey": "c",
                "BaseURL": "d"
            },
            "foundry_config": {
                "profiles_dataset_rid": "p",
                "visits_dataset_rid": "v"
            },
            "last_sync_at": "2026-02-16T08:30:00Z"
        }))
        .unwrap();

        assert_eq!(connection.foundry_config.profiles_dataset_rid, "p");
        assert_eq!(
            connection.last_sync_at.as_ref().map(SyncTimestamp::as_str),
            Some("2026-02-16T08:30:00+00:00")
        );

        let out = serde_json::to_value(&connection).unwrap();
        assert!(out.get("foundryConfig").is_some());
        assert!(out.get("last_sync_at").is_none());
    }

    #[test]
    fn test_sync_state() {
        let mut connection = sample();
        assert_eq!(connection.sync_state(), SyncState::NeverSynced);

        connection.last_sync_at = Some(SyncTimestamp::parse("2026-02-16T08:30:00Z").unwrap());
        assert_eq!(connection.sync_state(), SyncState::Synced);
    }

    #[test]
    fn test_sync_update_shape() {
        let update = SyncUpdate::new(
            "conn_001",
            SyncTimestamp::parse("2026-02-16T08:30:00+00:00").unwrap(),
        );
        assert_eq!(
            serde_json::to_value(update).unwrap(),
            json!({
                "id": "conn_001",
                "lastSyncAt": "2026-02-16T08:30:00+00:00",
                "message": "lastSyncAt updated successfully"
            })
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = DirectoryError::NotFound("conn_999".to_string());
        assert_eq!(err.to_string(), "Connection 'conn_999' not found.");
    }
}
