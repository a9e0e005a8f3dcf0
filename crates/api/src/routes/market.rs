//! Market overview and chart routes.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use coindeck_common::error::AppError;
use coindeck_common::types::{ChartPoint, CoinSummary};
use coindeck_gateway::market;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/market_overview", get(market_overview))
        .route("/chart", get(chart))
}

#[derive(Debug, Serialize)]
pub struct MarketOverviewResponse {
    pub top_gainer: Option<CoinSummary>,
    pub top_loser: Option<CoinSummary>,
}

/// GET /market_overview — Top gainer and loser of the current market page.
///
/// Both fields are null when the upstream returns an empty page.
async fn market_overview(
    State(state): State<AppState>,
) -> Result<Json<MarketOverviewResponse>, AppError> {
    let page = state.gecko.coins_markets(market::OVERVIEW_PAGE_SIZE).await?;
    let (top_gainer, top_loser) = market::select_movers(&page);

    Ok(Json(MarketOverviewResponse {
        top_gainer,
        top_loser,
    }))
}

/// GET /chart — Chart history, oldest point first.
async fn chart() -> Json<Vec<ChartPoint>> {
    Json(market::chart_history())
}
