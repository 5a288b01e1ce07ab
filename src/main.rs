#![allow(non_snake_case)]

use dioxus_logger::tracing::{self, Level};
use qca::client::{self, config::NavConfig};

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to initialize logger");

    let config = match NavConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            return;
        }
    };

    tracing::info!("Starting {}", config.brand);

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(client::App);
}
