//! # trainboard-client
//!
//! The command surface a dashboard front end talks to: shared
//! [`AppState`](state::AppState) behind a `Mutex`, one module of commands per
//! domain, env-driven configuration and tracing setup.

pub mod commands;
pub mod config;
pub mod state;

use std::sync::Mutex;

use chrono::Local;
use tracing_subscriber::{fmt, EnvFilter};

use crate::commands::catalog::{self, CatalogQuery};
use crate::config::ClientConfig;
use crate::state::AppState;

/// Install the global tracing subscriber. Respects `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("trainboard_client_lib=debug,trainboard_store=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Seed a session from the environment and print the public catalog as
/// JSON on stdout.
pub fn run() -> anyhow::Result<()> {
    init_tracing();

    let config = ClientConfig::from_env();
    tracing::info!(?config, "Loaded configuration");
    tracing::info!(instance = %config.instance_name, "Starting training dashboard");

    let state = Mutex::new(AppState::from_config(config)?);

    let today = Local::now().date_naive();
    let page = catalog::search_catalog(&state, CatalogQuery::default(), today)
        .map_err(anyhow::Error::msg)?;
    tracing::info!(
        trainings = page.summary.total_trainings,
        upcoming = page.summary.upcoming_trainings,
        "Catalog ready"
    );

    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}
