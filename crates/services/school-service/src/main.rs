//! School Service - read-only REST API for the school database.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use school_service_lib::config::SchoolServiceConfig;

#[derive(Parser)]
#[command(name = "school-service")]
#[command(about = "Read-only REST API over users, courses and enrollments")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        #[arg(long, env = "SERVER_HOST")]
        host: Option<String>,
        #[arg(long, env = "SERVER_PORT")]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = SchoolServiceConfig::from_env();

    init_tracing(cli.verbose || config.server.debug);
    tracing::debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            school_service_lib::run_server(config).await
        }
        None => school_service_lib::run_server(config).await,
    };

    if let Err(e) = result {
        tracing::error!("School service failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug,tower_http=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
