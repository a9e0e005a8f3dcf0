//! Business logic for the Coindeck backend: the upstream price-API client,
//! portfolio valuation, market overview, quick exchange, the mock ledger,
//! and wallet-ownership verification.

pub mod coingecko;
pub mod exchange;
pub mod market;
pub mod portfolio;
pub mod transactions;
pub mod wallet;
