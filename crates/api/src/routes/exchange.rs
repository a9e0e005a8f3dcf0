//! Quick exchange route.

use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use coindeck_common::error::AppError;
use coindeck_gateway::exchange;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/quick_exchange", post(quick_exchange))
}

/// Request body for a quick exchange. Field names are camelCase to match
/// the dashboard frontend.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickExchangeRequest {
    pub have_coin: String,
    pub have_amount: f64,
    pub want_coin: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickExchangeResponse {
    pub message: String,
    pub exchanged_amount: f64,
}

/// POST /quick_exchange — Convert between two supported coins at table
/// rates. Unsupported coins are a 400 naming the coin.
async fn quick_exchange(
    Json(req): Json<QuickExchangeRequest>,
) -> Result<Json<QuickExchangeResponse>, AppError> {
    let outcome = exchange::quick_exchange(&req.have_coin, req.have_amount, &req.want_coin)?;

    tracing::info!(
        have = %req.have_coin,
        want = %req.want_coin,
        amount = req.have_amount,
        "Quick exchange computed"
    );

    Ok(Json(QuickExchangeResponse {
        message: format!(
            "Exchanged {} {} for {:.2} {}",
            req.have_amount, req.have_coin, outcome.exchanged_amount, req.want_coin
        ),
        exchanged_amount: outcome.exchanged_amount,
    }))
}
