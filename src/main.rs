// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use fleet_telemetry_sim::application::clock::SystemClock;
use fleet_telemetry_sim::infrastructure::config::{load_fleet_config, DEFAULT_CONFIG_PATH};
use fleet_telemetry_sim::presentation::{self, app_state::AppState};
use fleet_telemetry_sim::FleetService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let fleet_config = load_fleet_config(&config_path).context("loading fleet configuration")?;

    // Create service (application layer)
    let fleet_service = FleetService::new(fleet_config.groups(), Arc::new(SystemClock));

    // Create application state
    let state = Arc::new(AppState {
        fleet_service,
        generator: fleet_config.generator.clone(),
    });

    // Build router (presentation layer)
    let router = presentation::router(state);

    // Start server
    let addr: SocketAddr = fleet_config
        .server
        .bind
        .parse()
        .with_context(|| format!("invalid bind address `{}`", fleet_config.server.bind))?;
    tracing::info!(%addr, "starting fleet-telemetry-sim");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
