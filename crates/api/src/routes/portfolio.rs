//! Portfolio valuation route.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use coindeck_common::error::AppError;
use coindeck_common::types::PortfolioLineItem;
use coindeck_gateway::portfolio::PortfolioService;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/portfolio", get(get_portfolio))
}

#[derive(Debug, Deserialize)]
pub struct PortfolioQuery {
    /// User ID or username
    pub user: String,
}

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub user: String,
    pub total_value: f64,
    pub coins: Vec<PortfolioLineItem>,
}

/// GET /portfolio?user=<id> — Value a user's holdings at current prices.
///
/// Unknown users are 404 before any upstream call; an upstream failure is
/// a 502.
async fn get_portfolio(
    State(state): State<AppState>,
    Query(query): Query<PortfolioQuery>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let valuation = PortfolioService::get(&state.gecko, &query.user).await?;

    Ok(Json(PortfolioResponse {
        user: query.user,
        total_value: valuation.total_value,
        coins: valuation.coins,
    }))
}
