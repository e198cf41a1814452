//! Sensor Console
//!
//! Desktop admin console for the API Sensor platform: endpoints,
//! scheduler jobs, and the key/value store.
//!
//! This is the main entry point for the Dioxus Desktop application.

use anyhow::Context;
use console_core::ConsoleConfig;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    // Initialize logging, RUST_LOG overrides the default level
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .pretty()
        .init();

    // Print startup banner
    println!();
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║                                                           ║");
    println!("║   📡 API Sensor Console                                   ║");
    println!("║   Endpoints, schedules, and key/value store               ║");
    println!("║                                                           ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    let config_path = ConsoleConfig::resolve_path(None);
    let config = ConsoleConfig::load(None).context("loading configuration")?;
    match &config_path {
        Some(path) if path.exists() => {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }
        _ => tracing::info!("No configuration file found, using defaults"),
    }
    tracing::info!(
        endpoint_api = %config.api.endpoint_api,
        scheduler_api = %config.api.scheduler_api,
        store_api = %config.api.store_api,
        "Backend base URLs",
    );

    // Launch the Dioxus desktop application
    console_ui::launch(config);
    Ok(())
}
