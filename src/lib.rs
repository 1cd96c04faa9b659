//! Hallpass library root.
//! Exposes the configuration, domain logic, storage layer, and the
//! high-level serve() entry point.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod utils;
pub mod web;

use clap::Parser;
use cli::Cli;
use config::Config;
use db::{initialize::init_db, pool::DbPool};
use errors::AppResult;
use std::fs;
use tokio::net::TcpListener;
use tokio::signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};
use web::state::AppState;

/// Entry point used by main.rs: parse the CLI, load config, serve.
pub async fn run() -> AppResult<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let mut cfg = Config::load();

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(port) = cli.port {
        cfg.port = port;
    }

    serve(cfg).await
}

/// Open the database, seed the default settings, and run the HTTP server
/// until interrupted.
pub async fn serve(cfg: Config) -> AppResult<()> {
    if let Some(parent) = std::path::Path::new(&cfg.database).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    info!("Database ready at {}", cfg.database);

    let state = AppState::new(pool);
    let app = web::router(state);

    let address = format!("0.0.0.0:{}", cfg.port);
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received SIGTERM, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        _ = terminate => {},
    }
}
