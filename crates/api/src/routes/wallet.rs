//! Wallet routes — transactions, connect challenge, signature verification.

use axum::extract::Query;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use coindeck_common::error::AppError;
use coindeck_common::types::Transaction;
use coindeck_gateway::transactions::recent_transactions;
use coindeck_gateway::wallet::{WalletVerifier, connect_challenge};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions))
        .route("/connect_wallet", post(connect_wallet))
        .route("/verify_wallet", post(verify_wallet))
}

#[derive(Debug, Deserialize)]
pub struct WalletQuery {
    pub wallet_address: String,
}

#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub wallet_address: String,
    pub transactions: Vec<Transaction>,
}

/// GET /transactions?wallet_address=<addr> — Recent ledger activity.
async fn list_transactions(Query(query): Query<WalletQuery>) -> Json<TransactionsResponse> {
    Json(TransactionsResponse {
        wallet_address: query.wallet_address,
        transactions: recent_transactions(),
    })
}

#[derive(Debug, Serialize)]
pub struct ConnectWalletResponse {
    pub message: String,
    pub wallet_address: String,
}

/// POST /connect_wallet?wallet_address=<addr> — Issue the ownership
/// challenge the wallet must sign.
async fn connect_wallet(Query(query): Query<WalletQuery>) -> Json<ConnectWalletResponse> {
    let message = connect_challenge(&query.wallet_address);

    Json(ConnectWalletResponse {
        message,
        wallet_address: query.wallet_address,
    })
}

/// Request body for wallet verification.
#[derive(Debug, Deserialize)]
pub struct VerifyWalletRequest {
    pub wallet_address: String,
    pub message_text: String,
    pub signature: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyWalletResponse {
    pub message: String,
    pub verified: bool,
    pub wallet_address: String,
}

/// POST /verify_wallet — Recover the signer and confirm wallet ownership.
///
/// Any failure, including a recovered/claimed mismatch, is a 400; a 2xx
/// body always carries `verified: true`.
async fn verify_wallet(
    Json(req): Json<VerifyWalletRequest>,
) -> Result<Json<VerifyWalletResponse>, AppError> {
    WalletVerifier::verify(&req.wallet_address, &req.message_text, &req.signature)?;

    Ok(Json(VerifyWalletResponse {
        message: "Wallet ownership verified.".to_string(),
        verified: true,
        wallet_address: req.wallet_address,
    }))
}
