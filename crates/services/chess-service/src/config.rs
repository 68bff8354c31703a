//! Chess service configuration.

use std::env;

use common::{DatabaseConfig, LogFormat, ServiceConfig};

const DEFAULT_SERVICE_NAME: &str = "chess-service";

/// Chess service configuration.
#[derive(Debug, Clone)]
pub struct ChessServiceConfig {
    pub service: ServiceConfig,
    /// Connection settings forwarded to the repository implementation
    pub database: DatabaseConfig,
}

impl ChessServiceConfig {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_format = match lookup("LOG_FORMAT").map(|v| v.parse::<LogFormat>()) {
            Some(Ok(format)) => format,
            Some(Err(e)) => {
                tracing::warn!("{}, falling back to {:?}", e, defaults.service.log_format);
                defaults.service.log_format
            }
            None => defaults.service.log_format,
        };

        Self {
            service: ServiceConfig {
                service_name: lookup("CHESS_SERVICE_NAME")
                    .unwrap_or(defaults.service.service_name),
                log_level: lookup("LOG_LEVEL").unwrap_or(defaults.service.log_level),
                log_format,
            },
            database: DatabaseConfig {
                url: lookup("CHESS_DATABASE_URL")
                    .or_else(|| lookup("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: lookup("CHESS_DATABASE_MAX_CONNECTIONS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.max_connections),
                min_connections: lookup("CHESS_DATABASE_MIN_CONNECTIONS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.min_connections),
            },
        }
    }
}

impl Default for ChessServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: DEFAULT_SERVICE_NAME.to_string(),
                ..ServiceConfig::default()
            },
            database: DatabaseConfig::default(),
        }
    }
}
