//! Settings read by the API server and the import tool.

use serde::Deserialize;

/// Loaded from `config/default.yaml`, an optional `config/{APP_ENV}.yaml`
/// and `APP_*` environment variables, in that order of precedence.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// SQLite database path or URL holding the catalog.
    pub database_url: String,
}
