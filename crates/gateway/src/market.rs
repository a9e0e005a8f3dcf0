//! Market overview and chart history.

use chrono::{Duration, Utc};

use coindeck_common::types::{ChartPoint, CoinSummary};

use crate::coingecko::MarketCoin;

/// Page size for the market snapshot request.
pub const OVERVIEW_PAGE_SIZE: u32 = 50;

/// Fixed hourly price series backing the dashboard chart.
const CHART_SERIES: &[f64] = &[
    40000.0, 38000.0, 37000.0, 35000.0, 34000.0, 36000.0, 35352.0,
];

/// Pick the top gainer and top loser by 24h change.
///
/// Forward scan keeping the first extremal element, so ties resolve to the
/// earlier entry in upstream order. An empty page yields `(None, None)`.
pub fn select_movers(coins: &[MarketCoin]) -> (Option<CoinSummary>, Option<CoinSummary>) {
    let mut gainer: Option<&MarketCoin> = None;
    let mut loser: Option<&MarketCoin> = None;

    for coin in coins {
        if gainer.is_none_or(|g| coin.price_change_percentage_24h > g.price_change_percentage_24h)
        {
            gainer = Some(coin);
        }
        if loser.is_none_or(|l| coin.price_change_percentage_24h < l.price_change_percentage_24h) {
            loser = Some(coin);
        }
    }

    (gainer.map(summarize), loser.map(summarize))
}

fn summarize(coin: &MarketCoin) -> CoinSummary {
    CoinSummary {
        id: coin.id.clone(),
        symbol: coin.symbol.clone(),
        current_price: coin.current_price,
        change_24h: coin.price_change_percentage_24h,
    }
}

/// Chart history ending at the current hour, one point per hour, oldest
/// first.
pub fn chart_history() -> Vec<ChartPoint> {
    let now = Utc::now();
    let len = CHART_SERIES.len() as i64;

    CHART_SERIES
        .iter()
        .enumerate()
        .map(|(i, price)| ChartPoint {
            timestamp: now - Duration::hours(len - 1 - i as i64),
            price: *price,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(id: &str, change: f64) -> MarketCoin {
        MarketCoin {
            id: id.to_string(),
            symbol: id[..3.min(id.len())].to_string(),
            current_price: 100.0,
            price_change_percentage_24h: change,
        }
    }

    #[test]
    fn test_selects_extremes() {
        let page = vec![coin("bitcoin", 1.2), coin("ethereum", -4.0), coin("solana", 7.5)];
        let (gainer, loser) = select_movers(&page);
        assert_eq!(gainer.unwrap().id, "solana");
        assert_eq!(loser.unwrap().id, "ethereum");
    }

    #[test]
    fn test_first_extremal_wins_on_tie() {
        let page = vec![coin("first", 5.0), coin("second", 5.0), coin("third", 5.0)];
        let (gainer, loser) = select_movers(&page);
        assert_eq!(gainer.unwrap().id, "first");
        assert_eq!(loser.unwrap().id, "first");
    }

    #[test]
    fn test_empty_page_yields_none() {
        let (gainer, loser) = select_movers(&[]);
        assert!(gainer.is_none());
        assert!(loser.is_none());
    }

    #[test]
    fn test_chart_history_is_ascending() {
        let points = chart_history();
        assert_eq!(points.len(), 7);
        assert!(points.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        assert_eq!(points.last().unwrap().price, 35352.0);
    }
}
