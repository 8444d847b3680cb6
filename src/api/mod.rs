//! API layer - HTTP endpoint handlers.

mod connections;
mod health;
mod metrics;
mod routes;

pub use connections::{get_connection, list_connections, update_connection};
pub use health::{health, HealthResponse, StoreHealthResponse};
pub use metrics::prometheus_metrics;
pub use routes::{api_routes, CONNECTIONS_PATH};
