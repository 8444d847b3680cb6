mod settings;

pub use settings::{OtelConfig, ServerConfig, Settings, StoreConfig};
