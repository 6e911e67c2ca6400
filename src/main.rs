//! hello-service entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};

use hello_service::api::{create_router, ServiceState};
use hello_service::config::Config;
use hello_service::error::ServiceError;
use hello_service::logging;
use hello_service::utils::shutdown_signal;

/// Minimal HTTP service with health, readiness and metrics endpoints.
#[derive(Parser, Debug)]
#[command(name = "hello-service")]
#[command(about = "Greeting service with liveness, readiness and metrics probes")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,

    /// Bind address (overrides HOST).
    #[arg(long)]
    host: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve HTTP requests (default).
    Serve {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,

        /// Bind address (overrides HOST).
        #[arg(long)]
        host: Option<String>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    logging::init(args.verbose);

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Serve { port, host }) => cmd_serve(port, host).await,
        None => cmd_serve(args.port, args.host).await,
    }
}

/// Load and validate configuration, applying CLI overrides.
fn load_config(port: Option<u16>, host: Option<String>) -> Result<Config, ServiceError> {
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Some(port) = port {
        config.port = port;
    }
    if let Some(host) = host {
        config.host = host;
    }

    config.validate().map_err(|reason| {
        error!("Invalid configuration: {}", reason);
        ServiceError::InvalidConfig(reason)
    })?;

    Ok(config)
}

/// Serve HTTP requests until a shutdown signal arrives.
async fn cmd_serve(port: Option<u16>, host: Option<String>) -> anyhow::Result<()> {
    let config = load_config(port, host)?;
    info!("Starting hello-service version {}", config.app_version);

    let state = ServiceState::from_config(&config);
    let router = create_router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(ServiceError::from)?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServiceError::from)?;

    info!("Server stopped");
    Ok(())
}

/// Print the effective configuration.
fn cmd_check_config() -> anyhow::Result<()> {
    let config = load_config(None, None)?;

    println!("Configuration OK");
    println!("  APP_VERSION: {}", config.app_version);
    println!("  HOST:        {}", config.host);
    println!("  PORT:        {}", config.port);
    println!("  RUST_LOG:    {}", config.rust_log);
    Ok(())
}
