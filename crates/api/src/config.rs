//! Application configuration loaded from environment variables.

use document_store::CollectionLocator;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `DOCUMENT_DB` — document database name (default: `"core"`)
/// - `DOCUMENT_COLLECTION` — collection name (default: `"documents"`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub collection: String,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database: std::env::var("DOCUMENT_DB").unwrap_or_else(|_| "core".to_string()),
            collection: std::env::var("DOCUMENT_COLLECTION")
                .unwrap_or_else(|_| "documents".to_string()),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the locator for the configured document collection.
    pub fn locator(&self) -> CollectionLocator {
        CollectionLocator::new(self.database.as_str(), self.collection.as_str())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database: "core".to_string(),
            collection: "documents".to_string(),
            log_level: "info".to_string(),
        }
    }
}
