//! Shared configuration structures.

use std::fmt;
use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Verbose diagnostics (debug-level logging)
    pub debug: bool,
}

impl ServerConfig {
    /// Get the full server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolve the bind address. The host must be an IP literal.
    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        let addr = self.addr();
        addr.parse()
            .map_err(|e| AppError::internal(format!("Invalid listen address {}: {}", addr, e)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            debug: true,
        }
    }
}

/// Database configuration.
#[derive(Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub name: String,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub port: u16,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Seconds a request waits for a pooled connection
    pub acquire_timeout_seconds: u64,
}

impl DatabaseConfig {
    /// Postgres connection URL. Credentials are percent-encoded.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            self.name
        )
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("acquire_timeout_seconds", &self.acquire_timeout_seconds)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            name: "escola".to_string(),
            user: "app_user".to_string(),
            password: "App_User123!".to_string(),
            port: 5432,
            max_connections: 10,
            min_connections: 0,
            acquire_timeout_seconds: 5,
        }
    }
}
