//! Portfolio valuation — static holdings priced against live quotes.
//!
//! Holdings are read-only demo data held in process memory; there is no
//! persistence layer behind them.

use std::collections::HashMap;

use coindeck_common::error::AppError;
use coindeck_common::types::PortfolioLineItem;

use crate::coingecko::{CoinGeckoClient, SpotQuote};

/// Static holdings table: user id -> ordered (ticker, amount) positions.
const USER_WALLETS: &[(&str, &[(&str, f64)])] = &[
    ("user1", &[("BTC", 0.5), ("ETH", 2.0), ("DOGE", 5000.0)]),
    ("user2", &[("BTC", 0.1), ("ADA", 1000.0)]),
];

/// Ticker -> CoinGecko coin id. Tickers without an entry are sent to the
/// upstream unchanged.
const TICKER_IDS: &[(&str, &str)] = &[
    ("BTC", "bitcoin"),
    ("ETH", "ethereum"),
    ("DOGE", "dogecoin"),
    ("ADA", "cardano"),
    ("USDT", "tether"),
    ("SOL", "solana"),
    ("LTC", "litecoin"),
];

/// Look up a user's positions, in holdings-table order.
pub fn holdings_for(user: &str) -> Option<&'static [(&'static str, f64)]> {
    USER_WALLETS
        .iter()
        .find(|(u, _)| *u == user)
        .map(|(_, holdings)| *holdings)
}

/// Translate a ticker to its upstream coin id, passing unmapped tickers
/// through verbatim.
pub fn coin_id(ticker: &str) -> &str {
    TICKER_IDS
        .iter()
        .find(|(t, _)| *t == ticker)
        .map(|(_, id)| *id)
        .unwrap_or(ticker)
}

/// A user's valued portfolio.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioValuation {
    pub total_value: f64,
    pub coins: Vec<PortfolioLineItem>,
}

/// Service layer for portfolio valuation.
pub struct PortfolioService;

impl PortfolioService {
    /// Value a user's holdings with one batched quote request.
    ///
    /// Unknown users fail before any upstream call is issued.
    pub async fn get(
        client: &CoinGeckoClient,
        user: &str,
    ) -> Result<PortfolioValuation, AppError> {
        let holdings = holdings_for(user)
            .ok_or_else(|| AppError::NotFound(format!("User {user} not found.")))?;

        // Distinct mapped ids, one batched request.
        let mut ids: Vec<String> = Vec::with_capacity(holdings.len());
        for (ticker, _) in holdings {
            let id = coin_id(ticker);
            if !ids.iter().any(|existing| existing == id) {
                ids.push(id.to_string());
            }
        }

        let quotes = client.simple_price(&ids).await?;
        let valuation = value_holdings(holdings, &quotes);

        tracing::debug!(
            user,
            total_value = valuation.total_value,
            positions = valuation.coins.len(),
            "Portfolio valued"
        );

        Ok(valuation)
    }
}

/// Price each position against the quote map, in holdings order.
///
/// Tickers whose id is absent from the map are skipped entirely: they
/// contribute neither a line item nor value to the total. They are not
/// zero-filled.
pub fn value_holdings(
    holdings: &[(&str, f64)],
    quotes: &HashMap<String, SpotQuote>,
) -> PortfolioValuation {
    let mut total_value = 0.0;
    let mut coins = Vec::with_capacity(holdings.len());

    for (ticker, amount) in holdings {
        let Some(quote) = quotes.get(coin_id(ticker)) else {
            continue;
        };
        let value = amount * quote.usd;
        total_value += value;
        coins.push(PortfolioLineItem {
            coin: ticker.to_string(),
            amount: *amount,
            price: quote.usd,
            value,
            change_24h: quote.usd_24h_change,
        });
    }

    PortfolioValuation { total_value, coins }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(usd: f64, change: f64) -> SpotQuote {
        SpotQuote {
            usd,
            usd_24h_change: change,
        }
    }

    #[test]
    fn test_values_follow_holdings_order() {
        let holdings: &[(&str, f64)] = &[("BTC", 0.5), ("ETH", 2.0)];
        let quotes = HashMap::from([
            ("ethereum".to_string(), quote(2500.0, -0.8)),
            ("bitcoin".to_string(), quote(40000.0, 1.5)),
        ]);

        let valuation = value_holdings(holdings, &quotes);

        assert_eq!(valuation.total_value, 25000.0);
        assert_eq!(valuation.coins.len(), 2);
        assert_eq!(valuation.coins[0].coin, "BTC");
        assert_eq!(valuation.coins[0].value, 20000.0);
        assert_eq!(valuation.coins[1].coin, "ETH");
        assert_eq!(valuation.coins[1].change_24h, -0.8);
    }

    #[test]
    fn test_missing_quote_is_excluded_not_zero_filled() {
        let holdings: &[(&str, f64)] = &[("BTC", 0.5), ("DOGE", 5000.0)];
        let quotes = HashMap::from([("bitcoin".to_string(), quote(40000.0, 0.0))]);

        let valuation = value_holdings(holdings, &quotes);

        assert_eq!(valuation.coins.len(), 1);
        assert_eq!(valuation.coins[0].coin, "BTC");
        assert_eq!(valuation.total_value, 20000.0);
    }

    #[test]
    fn test_unmapped_ticker_passes_through() {
        assert_eq!(coin_id("BTC"), "bitcoin");
        assert_eq!(coin_id("WEIRDCOIN"), "WEIRDCOIN");
    }

    #[test]
    fn test_known_users_present() {
        assert!(holdings_for("user1").is_some());
        assert!(holdings_for("user2").is_some());
        assert!(holdings_for("nobody").is_none());
    }
}
