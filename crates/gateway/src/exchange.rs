//! Quick exchange — static-table currency conversion.
//!
//! Rates are fixed USD reference values for the dashboard widget, not a
//! live order book.

use coindeck_common::error::AppError;

/// USD-denominated reference rates.
const USD_RATES: &[(&str, f64)] = &[
    ("BTC", 40000.0),
    ("ETH", 2500.0),
    ("USDT", 1.0),
    ("DOGE", 0.08),
    ("ADA", 0.45),
    ("SOL", 95.0),
];

/// Look up a coin's USD reference rate.
pub fn usd_rate(coin: &str) -> Option<f64> {
    USD_RATES
        .iter()
        .find(|(c, _)| *c == coin)
        .map(|(_, rate)| *rate)
}

/// Outcome of a quick exchange.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeOutcome {
    /// Units of `want_coin` per unit of `have_coin`
    pub rate: f64,
    pub exchanged_amount: f64,
}

/// Convert `have_amount` of `have_coin` into `want_coin` at table rates.
///
/// Coins absent from the rate table are rejected by name.
pub fn quick_exchange(
    have_coin: &str,
    have_amount: f64,
    want_coin: &str,
) -> Result<ExchangeOutcome, AppError> {
    match (usd_rate(have_coin), usd_rate(want_coin)) {
        (Some(have), Some(want)) => {
            let rate = have / want;
            Ok(ExchangeOutcome {
                rate,
                exchanged_amount: have_amount * rate,
            })
        }
        (None, Some(_)) => Err(AppError::Validation(format!(
            "Unsupported coin: {have_coin}"
        ))),
        (Some(_), None) => Err(AppError::Validation(format!(
            "Unsupported coin: {want_coin}"
        ))),
        (None, None) => Err(AppError::Validation(format!(
            "Unsupported coins: {have_coin}, {want_coin}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_btc_to_usdt_at_table_rate() {
        let outcome = quick_exchange("BTC", 1.0, "USDT").unwrap();
        assert_eq!(outcome.exchanged_amount, 40000.0);
        assert_eq!(outcome.rate, 40000.0);
    }

    #[test]
    fn test_usdt_to_btc_inverts_rate() {
        let outcome = quick_exchange("USDT", 40000.0, "BTC").unwrap();
        assert!((outcome.exchanged_amount - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unsupported_coin_named_in_error() {
        let err = quick_exchange("BTC", 1.0, "SHIB").unwrap_err();
        assert!(err.to_string().contains("SHIB"));

        let err = quick_exchange("PEPE", 1.0, "SHIB").unwrap_err();
        assert!(err.to_string().contains("PEPE"));
        assert!(err.to_string().contains("SHIB"));
    }
}
