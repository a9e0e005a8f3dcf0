//! Coindeck API server binary entrypoint.

use std::net::SocketAddr;
use std::time::Duration;

use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use coindeck_common::config::AppConfig;
use coindeck_gateway::coingecko::CoinGeckoClient;

use coindeck_api::routes::create_router;
use coindeck_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("coindeck_api=debug,coindeck_gateway=debug,tower_http=debug")
        }))
        .init();

    tracing::info!("Starting Coindeck API server...");

    // Load configuration
    let config = AppConfig::from_env()?;

    // Shared upstream client with a bounded timeout; the price API is
    // treated as occasionally unavailable.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream_timeout_secs))
        .build()?;
    let gecko = CoinGeckoClient::new(http, config.coingecko_base_url.clone());
    tracing::info!(base_url = %config.coingecko_base_url, "Upstream price client ready");

    let addr = SocketAddr::new(config.host.parse()?, config.port);

    // Build application state and router
    let state = AppState::new(gecko, config);
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(64 * 1024));

    // Start server
    tracing::info!("API server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
