use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One valued position in a user's portfolio.
///
/// `value` is always `amount * price` at the moment of the upstream quote;
/// nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioLineItem {
    /// Ticker as it appears in the holdings table (e.g. "BTC")
    pub coin: String,
    pub amount: f64,
    /// Spot price in USD
    pub price: f64,
    /// `amount * price`
    pub value: f64,
    /// 24-hour percentage change for the coin
    pub change_24h: f64,
}

/// Compact market snapshot of a single coin, used for the
/// top-gainer / top-loser summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSummary {
    pub id: String,
    pub symbol: String,
    pub current_price: f64,
    pub change_24h: f64,
}

/// A single point of chart history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// Status of a ledger transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Completed => write!(f, "completed"),
            TransactionStatus::Pending => write!(f, "pending"),
            TransactionStatus::Failed => write!(f, "failed"),
        }
    }
}

/// One entry of the transaction ledger shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub coin: String,
    pub transaction_amount: f64,
    pub transaction_id: String,
    pub date: DateTime<Utc>,
    pub status: TransactionStatus,
    pub fees: f64,
}
