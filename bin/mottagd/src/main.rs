//! `mottagd` — the Mottag fleet API server.
//!
//! Usage:
//!   mottagd [-c /path/to/server.toml] [--listen <addr>]

mod config;
mod routes;

use std::path::PathBuf;

use clap::Parser;
use mottag_core::Module;
use tracing::info;

use config::ServerConfig;

/// Mottag fleet API server.
#[derive(Parser, Debug)]
#[command(name = "mottagd", about = "Yard, moto and RFID tag management API")]
struct Cli {
    /// Path to the TOML config file.
    #[arg(short = 'c', long = "config", default_value = "mottag.toml")]
    config: PathBuf,

    /// Listen address (overrides the config file).
    #[arg(long = "listen")]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    info!("loading configuration from {}", cli.config.display());
    let server_config = ServerConfig::load(&cli.config)?;
    let listen = cli.listen.unwrap_or_else(|| server_config.listen.clone());

    let data_dir = PathBuf::from(&server_config.storage.data_dir);
    std::fs::create_dir_all(&data_dir)?;

    let core_config = mottag_core::ServiceConfig {
        data_dir: Some(data_dir),
        sqlite_path: server_config.storage.sqlite_path.clone().map(PathBuf::from),
        listen: listen.clone(),
    };

    let sql = mottag_sql::SqliteStore::open(&core_config.resolve_sqlite_path())
        .map_err(|e| anyhow::anyhow!("failed to open SQL store: {}", e))?;

    let fleet_service = mottag_fleet::service::FleetService::new(Box::new(sql))
        .map_err(|e| anyhow::anyhow!("failed to initialize fleet service: {}", e))?;
    let fleet_module = mottag_fleet::FleetModule::new(fleet_service);
    info!("fleet module initialized");

    let module_routes = vec![(fleet_module.name(), fleet_module.routes())];
    let app = routes::build_router(module_routes);

    let listener = tokio::net::TcpListener::bind(&listen).await?;
    info!("mottagd listening on {}", listen);
    axum::serve(listener, app).await?;

    Ok(())
}
