use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

/// Aggregated runtime configuration for the storefront REST API.
/// Auth and database settings load separately in their own modules.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    /// Reads the full configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
        }
    }
}
