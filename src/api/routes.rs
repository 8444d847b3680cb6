use axum::{routing::get, Router};

use crate::server::AppState;

use super::connections::{get_connection, list_connections, update_connection};
use super::health::health;
use super::metrics::prometheus_metrics;

/// Base path of the connection directory endpoints
pub const CONNECTIONS_PATH: &str = "/backend/datasources/organizations/connections";

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health & Metrics
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        // Connection directory
        .route(CONNECTIONS_PATH, get(list_connections))
        .route(
            &format!("{}/{{id}}", CONNECTIONS_PATH),
            get(get_connection).patch(update_connection),
        )
}
