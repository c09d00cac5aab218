//! Flow server binary - composition root.
//!
//! Ties the Flow crates into a single executable:
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Read the reply-service credential from the environment
//! 3. Start the axum REST API server with the chat endpoint

mod cli;

use clap::Parser;

use flow_api::routes;
use flow_api::state::AppState;
use flow_core::config::FlowConfig;

/// Environment variable holding the Hugging Face API key.
const API_KEY_ENV: &str = "HUGGINGFACE_API_KEY";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();

    // Config first: the log filter may come from it. Diagnostics emitted
    // during this load predate the subscriber and are dropped.
    let config_file = args.resolve_config_path();
    let mut config = FlowConfig::load_or_default(&config_file);

    // Tracing. Priority: --log-level flag > RUST_LOG > config value.
    let filter = args
        .resolve_log_level()
        .map(tracing_subscriber::EnvFilter::new)
        .unwrap_or_else(|| {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level))
        });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Flow v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    config.server.port = args.resolve_port(config.server.port);

    // Reply-service credential. Missing is not fatal; the chat endpoint
    // reports it per request instead.
    let api_key = std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());
    if api_key.is_some() {
        tracing::info!("Hugging Face API key is loaded");
    } else {
        tracing::warn!("Hugging Face API key is NOT loaded");
    }
    tracing::info!("Using built-in reply selection (works offline)");

    let state = AppState::new(config.clone(), api_key);

    if let Err(e) = routes::start_server(&config, state).await {
        tracing::error!(error = %e, "Server failed — is another instance running?");
        tracing::error!(
            "Try: PORT={} cargo run -p flow-app",
            config.server.port.saturating_add(1)
        );
        return Err(e.into());
    }

    Ok(())
}
