mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use dioxus_logger::tracing::{self, Level};

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    dioxus_logger::init(Level::INFO)
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logger: {}", e)))?;

    let config = Config::from_env()?;
    let http_client = startup::setup_reqwest_client()?;
    let state = AppState::new(&config, http_client);

    // Warm the version cache so the first dependency snippet does not wait on it
    let version_resolver = state.version_resolver.clone();
    tokio::spawn(async move {
        let version = version_resolver.resolve_version().await;
        tracing::info!("Latest Javacord version: {}", version);
    });

    tracing::info!("Starting Javacord bot");

    bot::start::start_bot(&config, state).await
}
