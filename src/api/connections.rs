//! Organization datasource connection endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::datasource::{
    Connection, DirectoryError, SyncTimestamp, SyncUpdate, UpdateLastSyncRequest,
};
use crate::error::{AppError, Result};
use crate::metrics::{DirectoryMetrics, Operation, Outcome};
use crate::server::AppState;

/// GET /backend/datasources/organizations/connections - List all connections
#[tracing::instrument(name = "http.list_connections", skip(state))]
pub async fn list_connections(State(state): State<AppState>) -> Json<Vec<Connection>> {
    let started = Instant::now();
    let connections = state.store.list().await;
    DirectoryMetrics::observe_store_latency(Operation::List, started);
    DirectoryMetrics::record_request(Operation::List, Outcome::Ok);

    tracing::debug!(count = connections.len(), "Listed connections");
    Json(connections)
}

/// GET /backend/datasources/organizations/connections/{id} - Get a single connection
#[tracing::instrument(name = "http.get_connection", skip(state))]
pub async fn get_connection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Connection>> {
    let started = Instant::now();
    let result = state.store.get(&id).await;
    DirectoryMetrics::observe_store_latency(Operation::Get, started);

    match result {
        Ok(connection) => {
            DirectoryMetrics::record_request(Operation::Get, Outcome::Ok);
            Ok(Json(connection))
        }
        Err(e) => {
            DirectoryMetrics::record_request(Operation::Get, outcome_for(&e));
            Err(e.into())
        }
    }
}

/// PATCH /backend/datasources/organizations/connections/{id} - Update lastSyncAt
#[tracing::instrument(name = "http.update_connection", skip(state, payload))]
pub async fn update_connection(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateLastSyncRequest>, JsonRejection>,
) -> Result<Json<SyncUpdate>> {
    let timestamp = match parse_update_request(payload) {
        Ok(timestamp) => timestamp,
        Err(e) => {
            DirectoryMetrics::record_request(Operation::UpdateLastSync, Outcome::Invalid);
            return Err(e);
        }
    };

    let started = Instant::now();
    let result = state.store.update_last_sync(&id, timestamp).await;
    DirectoryMetrics::observe_store_latency(Operation::UpdateLastSync, started);

    match result {
        Ok(update) => {
            DirectoryMetrics::record_request(Operation::UpdateLastSync, Outcome::Ok);
            tracing::info!(
                connection_id = %update.id,
                last_sync_at = %update.last_sync_at,
                "Connection lastSyncAt updated"
            );
            Ok(Json(update))
        }
        Err(e) => {
            DirectoryMetrics::record_request(Operation::UpdateLastSync, outcome_for(&e));
            Err(e.into())
        }
    }
}

/// Validate the PATCH body and normalize its timestamp.
fn parse_update_request(
    payload: std::result::Result<Json<UpdateLastSyncRequest>, JsonRejection>,
) -> Result<SyncTimestamp> {
    let Json(request) = payload?;

    match request.last_sync_at {
        None => Err(AppError::validation(
            Some("lastSyncAt"),
            "missing",
            "Field required",
        )),
        Some(serde_json::Value::String(raw)) => Ok(SyncTimestamp::parse(&raw)?),
        Some(_) => Err(AppError::validation(
            Some("lastSyncAt"),
            "string_type",
            "Input should be a valid ISO-8601 date-time string",
        )),
    }
}

fn outcome_for(err: &DirectoryError) -> Outcome {
    match err {
        DirectoryError::NotFound(_) => Outcome::NotFound,
        _ => Outcome::Error,
    }
}
