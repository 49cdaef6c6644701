//! shiproute dashboard server
//!
//! Run with: cargo run -p shiproute-web
//! Requires OPENAI_API_KEY in the environment or in .env.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use shiproute_catalog::RouteCatalog;
use shiproute_config::Config;
use shiproute_llm::{LlmAssistant, OpenAiBackend};
use shiproute_web::{router::build_router, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shiproute=debug,info")),
        )
        .init();

    info!("Starting shiproute dashboard...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {e}");
            return Err(e.into());
        }
    };
    info!(model = %config.llm.model, base_url = %config.llm.base_url, "Configuration loaded");

    let backend = OpenAiBackend::new(config.api_key(), config.llm.model.clone())
        .with_base_url(config.llm.base_url.clone());
    let assistant = LlmAssistant::new(Arc::new(backend), config.llm.max_tokens, config.llm.temperature);

    let catalog = RouteCatalog::builtin();
    info!(routes = catalog.len(), "Route catalog ready");

    let state = AppState::new(catalog, Arc::new(assistant), config.llm.model.clone())?;

    let static_dir = resolve_static_dir(&config.server.static_dir);
    let app = build_router(state, &static_dir);

    let addr = config.server.bind;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Fall back to the crate's bundled assets when the configured dir is absent.
fn resolve_static_dir(configured: &str) -> String {
    if Path::new(configured).is_dir() {
        return configured.to_string();
    }
    let bundled = concat!(env!("CARGO_MANIFEST_DIR"), "/static");
    warn!(configured, bundled, "Static dir not found, using bundled assets");
    bundled.to_string()
}
