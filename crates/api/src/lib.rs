//! Axum API server for the Coindeck dashboard.
//!
//! Endpoints:
//! - GET  /            — liveness message
//! - GET  /health      — service health
//! - GET  /portfolio   — value a user's holdings at live prices
//! - GET  /market_overview — top gainer / top loser of the market page
//! - GET  /chart       — dashboard chart history
//! - GET  /transactions — recent ledger activity for a wallet
//! - POST /connect_wallet — issue the wallet-ownership challenge
//! - POST /quick_exchange — static-table currency conversion
//! - POST /verify_wallet — verify a personal-sign signature

pub mod routes;
pub mod state;
