//! # wifibuttond — wifibutton daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`wifibutton.toml`, `WIFIBUTTON_*` env vars)
//! - Initialise `tracing` with the configured filter
//! - Construct the virtual device and, optionally, its button simulator
//! - Construct the device service, injecting the device via the port trait
//! - Build the axum router and serve the API and the dashboard assets
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use tracing_subscriber::EnvFilter;
use wifibutton_adapter_http_axum::state::AppState;
use wifibutton_adapter_virtual::VirtualDevice;
use wifibutton_adapter_virtual::simulator::spawn_button_simulator;
use wifibutton_app::services::device_service::DeviceService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Device
    let device = VirtualDevice::new();
    let simulator = config.button_period().map(|period| {
        tracing::info!(?period, "button simulator enabled");
        spawn_button_simulator(device.clone(), period)
    });

    // HTTP
    let state = AppState::new(DeviceService::new(device));
    let options = config.router_options();
    match &options.dashboard_dir {
        Some(dir) => tracing::info!(dir = %dir.display(), "serving dashboard"),
        None => tracing::warn!("no dashboard directory configured, serving the API only"),
    }
    let app = wifibutton_adapter_http_axum::router::build(state, options);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "wifibuttond listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = simulator {
        handle.abort();
    }
    tracing::info!("wifibuttond stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
