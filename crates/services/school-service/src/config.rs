//! School service configuration.

use std::env;

use common::{DatabaseConfig, ServerConfig};

/// School service configuration, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct SchoolServiceConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl SchoolServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Database host, name and port are fixed; only the credentials and
    /// pool sizing come from the environment.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let database = DatabaseConfig {
            user: env::var("DB_USER").unwrap_or(defaults.database.user),
            password: env::var("DB_PASSWORD").unwrap_or(defaults.database.password),
            max_connections: parse_env("DB_MAX_CONNECTIONS")
                .unwrap_or(defaults.database.max_connections),
            min_connections: parse_env("DB_MIN_CONNECTIONS")
                .unwrap_or(defaults.database.min_connections),
            acquire_timeout_seconds: parse_env("DB_ACQUIRE_TIMEOUT_SECONDS")
                .unwrap_or(defaults.database.acquire_timeout_seconds),
            ..defaults.database
        };

        let server = ServerConfig {
            host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
            port: parse_env("SERVER_PORT").unwrap_or(defaults.server.port),
            debug: env::var("APP_DEBUG")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.server.debug),
        };

        Self { database, server }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
