//! School Service Library
//!
//! Read-only REST API over the `escola` database: users, courses and the
//! students enrolled in each course.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod infra;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

use std::sync::Arc;

use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::SchoolServiceConfig;
use crate::infra::Database;
use crate::repository::PgSchoolStore;
use crate::routes::create_router;
use crate::service::SchoolManager;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: SchoolServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Connection pool (lazy: the database may still be down)
    let db = Database::connect(&config.database).await?;

    // Create repository and service
    let school_repo = Arc::new(PgSchoolStore::new(db.into_connection()));
    let school_service = Arc::new(SchoolManager::new(school_repo));

    // Create app state
    let state = AppState::new(school_service);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr = config.server.socket_addr()?;
    info!("School service listening on http://{}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("School service stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            warn!("Received SIGTERM, shutting down");
        }
    }
}
