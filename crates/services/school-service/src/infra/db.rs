//! Database connection pool.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr};

use common::DatabaseConfig;

/// Database wrapper for connection management.
///
/// The pool connects lazily, so the service starts even while the database
/// is down. Each query acquires a connection and hands it back to the pool
/// when the query future completes or is dropped.
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Build the connection pool from configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect_lazy(true)
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        tracing::info!(
            host = %config.host,
            database = %config.name,
            max_connections = config.max_connections,
            "Database pool configured"
        );

        Ok(Self { connection })
    }

    /// Hand the pooled connection over to its owner.
    pub fn into_connection(self) -> DatabaseConnection {
        self.connection
    }
}
