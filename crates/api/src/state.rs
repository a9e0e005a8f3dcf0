//! Shared application state for the Axum API server.

use coindeck_common::config::AppConfig;
use coindeck_gateway::coingecko::CoinGeckoClient;

/// Application state shared across all route handlers via Axum `State`.
///
/// Everything in here is read-only per request; handlers share no mutable
/// state.
#[derive(Clone)]
pub struct AppState {
    pub gecko: CoinGeckoClient,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(gecko: CoinGeckoClient, config: AppConfig) -> Self {
        Self { gecko, config }
    }
}
