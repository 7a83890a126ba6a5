// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::loading::LoadingState;
use crate::application::power_service::PowerService;
use crate::application::station_service::StationService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::http_repository::HttpPowerRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, list_stations, station_power, status};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(HttpPowerRepository::new(&config.upstream)?);

    // Create services (application layer)
    let station_service = StationService::new(repository.clone());
    let power_service = PowerService::new(
        repository.clone(),
        config.pipeline,
        config.range.max_span_ms(),
        LoadingState::new(),
    );

    // Create application state
    let state = Arc::new(AppState {
        station_service,
        power_service,
    });

    // Build router (presentation layer)
    // Compression is applied per response in http_response, not as a layer
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/status", get(status))
        .route("/stations", get(list_stations))
        .route("/stations/:id/power", get(station_power))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind_addr.parse()?;
    tracing::info!(
        "Starting pv-power-chart service on {} (upstream {})",
        addr,
        config.upstream.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
