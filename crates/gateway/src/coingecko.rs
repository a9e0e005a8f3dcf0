//! Client for the upstream price API (CoinGecko REST v3).
//!
//! Quotes are fetched per request and never cached; a non-success status
//! from the upstream surfaces as `AppError::Upstream` (502 to the caller).

use std::collections::HashMap;

use serde::Deserialize;

use coindeck_common::error::AppError;

/// Spot quote for a single coin id, as returned by `simple/price`.
///
/// Missing fields deserialize to 0, matching how the dashboard treats
/// partial upstream payloads.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SpotQuote {
    #[serde(default)]
    pub usd: f64,
    #[serde(default)]
    pub usd_24h_change: f64,
}

/// One row of a `coins/markets` page.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketCoin {
    pub id: String,
    pub symbol: String,
    #[serde(default)]
    pub current_price: f64,
    #[serde(default)]
    pub price_change_percentage_24h: f64,
}

/// Thin client over the price API. Cheap to clone; the inner
/// `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    http: reqwest::Client,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Batched USD spot prices with 24h change for the given coin ids.
    pub async fn simple_price(
        &self,
        ids: &[String],
    ) -> Result<HashMap<String, SpotQuote>, AppError> {
        let response = self
            .http
            .get(format!("{}/simple/price", self.base_url))
            .query(&[
                ("ids", ids.join(",").as_str()),
                ("vs_currencies", "usd"),
                ("include_24hr_change", "true"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "simple/price returned non-success");
            return Err(AppError::Upstream(
                "Failed to fetch prices from CoinGecko.".to_string(),
            ));
        }

        Ok(response.json().await?)
    }

    /// One page of the market ranked by descending market cap, with 24h
    /// percentage change included.
    pub async fn coins_markets(&self, per_page: u32) -> Result<Vec<MarketCoin>, AppError> {
        let response = self
            .http
            .get(format!("{}/coins/markets", self.base_url))
            .query(&[
                ("vs_currency", "usd"),
                ("order", "market_cap_desc"),
                ("per_page", per_page.to_string().as_str()),
                ("page", "1"),
                ("sparkline", "false"),
                ("price_change_percentage", "24h"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "coins/markets returned non-success");
            return Err(AppError::Upstream(
                "Failed to fetch market data from CoinGecko.".to_string(),
            ));
        }

        Ok(response.json().await?)
    }
}
