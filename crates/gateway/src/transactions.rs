//! Mock transaction ledger backing the "Recent Activities" table.

use chrono::{Duration, Utc};

use coindeck_common::types::{Transaction, TransactionStatus};

/// Recent activity returned for any wallet. Demo data only; there is no
/// per-wallet ledger behind it.
pub fn recent_transactions() -> Vec<Transaction> {
    let now = Utc::now();

    vec![
        Transaction {
            coin: "BTC".to_string(),
            transaction_amount: 0.042,
            transaction_id: "TX-1001".to_string(),
            date: now - Duration::hours(6),
            status: TransactionStatus::Completed,
            fees: 0.00021,
        },
        Transaction {
            coin: "ETH".to_string(),
            transaction_amount: 1.5,
            transaction_id: "TX-1002".to_string(),
            date: now - Duration::days(1),
            status: TransactionStatus::Completed,
            fees: 0.0031,
        },
        Transaction {
            coin: "DOGE".to_string(),
            transaction_amount: 2500.0,
            transaction_id: "TX-1003".to_string(),
            date: now - Duration::days(2),
            status: TransactionStatus::Pending,
            fees: 1.2,
        },
        Transaction {
            coin: "ADA".to_string(),
            transaction_amount: 300.0,
            transaction_id: "TX-1004".to_string(),
            date: now - Duration::days(4),
            status: TransactionStatus::Failed,
            fees: 0.17,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_ids_are_unique() {
        let txs = recent_transactions();
        let mut ids: Vec<_> = txs.iter().map(|t| t.transaction_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), txs.len());
    }

    #[test]
    fn test_ledger_is_newest_first() {
        let txs = recent_transactions();
        assert!(txs.windows(2).all(|w| w[0].date > w[1].date));
    }
}
