//! Item service configuration.

use std::env;

/// Item service configuration.
#[derive(Debug, Clone)]
pub struct ItemServiceConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl ItemServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("ITEM_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("ITEM_SERVICE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8001),
        }
    }
}

impl Default for ItemServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
        }
    }
}
