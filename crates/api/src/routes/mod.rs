pub mod exchange;
pub mod health;
pub mod market;
pub mod portfolio;
pub mod wallet;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(portfolio::router())
        .merge(market::router())
        .merge(exchange::router())
        .merge(wallet::router())
        .with_state(state)
}
