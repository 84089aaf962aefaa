//! # infinityd — Infinity Mode daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialize logging
//! - Open the settings store
//! - Construct the page driver, surface and event bus (adapters)
//! - Construct the automation controller and control bridge
//! - Bootstrap the session, then serve the HTTP control surface
//! - Stop the loop and shut down gracefully on Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use infinity_adapter_http_axum::router;
use infinity_adapter_http_axum::state::AppState;
use infinity_adapter_settings_toml::TomlSettingsStore;
use infinity_adapter_virtual::{VirtualPage, VirtualSurface};
use infinity_app::bridge::ControlBridge;
use infinity_app::controller::{AutomationController, ControllerOptions};
use infinity_app::event_bus::InProcessEventBus;
use infinity_app::session;
use infinity_domain::trigger::Trigger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Settings
    let store = if config.settings.in_memory {
        TomlSettingsStore::in_memory()
    } else {
        TomlSettingsStore::open(&config.settings.path)?
    };

    // Page, surface and event bus
    let page = VirtualPage::new(config.reply_duration())
        .with_dark_theme(config.page.dark_theme)
        .with_mobile_viewport(config.page.mobile_viewport);
    let surface = VirtualSurface::default();
    let event_bus = Arc::new(InProcessEventBus::new(256));

    // Controller
    let controller = AutomationController::with_options(
        page,
        store,
        surface,
        Arc::clone(&event_bus),
        ControllerOptions {
            settle_delay: config.settle_delay(),
        },
    );
    session::bootstrap(&controller, &config.page.language)
        .await
        .context("session bootstrap failed")?;
    let bridge = ControlBridge::new(controller);

    // HTTP
    let app = router::build(AppState::new(bridge.clone(), event_bus));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "infinityd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    bridge.controller().deactivate(Trigger::Sync).await;
    tracing::info!("infinityd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
