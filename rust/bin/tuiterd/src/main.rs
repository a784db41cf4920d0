//! `tuiterd`: the Tuiter server binary.
//!
//! Usage:
//!   tuiterd [-c <config.toml>] [--listen <addr>] [--data-dir <dir>]
//!
//! Flags override the config file; without either, the server listens on
//! 0.0.0.0:4000 and keeps `tuiter.sqlite` in the working directory.

mod config;
mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};

use tuiter_core::Module;
use tuiter_store::{DocumentStore, SqliteStore};

use config::ServerConfig;

/// Tuiter server.
#[derive(Parser, Debug)]
#[command(name = "tuiterd", about = "Tuiter server")]
struct Cli {
    /// Path to config file.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Listen address (overrides the config file).
    #[arg(long = "listen")]
    listen: Option<String>,

    /// Data directory (overrides the config file).
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let server_config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            ServerConfig::load(path)?
        }
        None => ServerConfig::default(),
    };
    let config = server_config.into_service_config(cli.listen, cli.data_dir);

    if let Some(dir) = &config.data_dir {
        std::fs::create_dir_all(dir)?;
    }

    // Opened once; shared by every access object.
    let sqlite_path = config.resolve_sqlite_path();
    let store: Arc<dyn DocumentStore> = Arc::new(
        SqliteStore::open(&sqlite_path)
            .map_err(|e| anyhow::anyhow!("failed to open document store: {}", e))?,
    );
    info!("Document store at {}", sqlite_path.display());

    let tuiter_module = tuiter::TuiterModule::new(store)?;
    info!("Tuiter module initialized");

    let module_routes = vec![(tuiter_module.name(), tuiter_module.routes())];
    let app = routes::build_router(module_routes);

    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    info!("Tuiter server listening on {}", config.listen);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Tuiter server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
