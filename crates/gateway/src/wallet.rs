//! Wallet ownership — connect challenge and signature verification.
//!
//! Verification recovers the signer from an EIP-191 personal-sign signature
//! (secp256k1 recovery via alloy) and compares it to the claimed address.
//! Comparison is case-insensitive: both sides are parsed to `Address`, so
//! checksummed and lowercase hex compare equal.

use alloy::primitives::{Address, Signature};
use uuid::Uuid;

use coindeck_common::error::AppError;

/// Challenge text a wallet must sign to prove ownership.
///
/// The nonce makes each connect attempt sign a distinct message; with no
/// persistence it is not replay-checked server-side.
pub fn connect_challenge(wallet_address: &str) -> String {
    format!(
        "Sign this message to connect wallet {} to Coindeck. Nonce: {}",
        wallet_address,
        Uuid::new_v4()
    )
}

/// Verifier for wallet-ownership signatures.
pub struct WalletVerifier;

impl WalletVerifier {
    /// Recover the signer of `message_text` and require it to match
    /// `wallet_address`.
    ///
    /// Every failure mode is a `Validation` error: malformed address or
    /// signature, recovery failure, and recovered/claimed mismatch alike.
    /// A mismatch is never reported as a successful "not verified" result.
    pub fn verify(
        wallet_address: &str,
        message_text: &str,
        signature: &str,
    ) -> Result<Address, AppError> {
        let claimed: Address = wallet_address
            .trim()
            .parse()
            .map_err(|e| AppError::Validation(format!("Invalid wallet address: {e}")))?;

        let sig_bytes = hex_decode(signature.trim())?;
        let signature = Signature::try_from(sig_bytes.as_slice())
            .map_err(|e| AppError::Validation(format!("Invalid signature: {e}")))?;

        let recovered = signature
            .recover_address_from_msg(message_text)
            .map_err(|e| AppError::Validation(format!("Signature recovery failed: {e}")))?;

        if recovered != claimed {
            return Err(AppError::Validation(format!(
                "Recovered address {recovered} does not match {claimed}"
            )));
        }

        tracing::info!(wallet = %claimed, "Wallet signature verified");

        Ok(claimed)
    }
}

/// Decode a hex-encoded string (with or without 0x prefix) into bytes.
fn hex_decode(hex: &str) -> Result<Vec<u8>, AppError> {
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    if !hex.len().is_multiple_of(2) {
        return Err(AppError::Validation(
            "Hex string must have even length".to_string(),
        ));
    }
    let bytes: Result<Vec<u8>, _> = (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
        .collect();
    bytes.map_err(|e| AppError::Validation(format!("Invalid hex signature: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::hex;
    use alloy::signers::{SignerSync, local::PrivateKeySigner};

    const MESSAGE: &str = "Sign this message to connect wallet 0xabc to Coindeck. Nonce: 42";

    fn sign(signer: &PrivateKeySigner, message: &str) -> String {
        let sig = signer.sign_message_sync(message.as_bytes()).unwrap();
        format!("0x{}", hex::encode(sig.as_bytes()))
    }

    #[test]
    fn test_roundtrip_verifies() {
        let signer = PrivateKeySigner::random();
        let signature = sign(&signer, MESSAGE);

        let recovered =
            WalletVerifier::verify(&signer.address().to_string(), MESSAGE, &signature).unwrap();
        assert_eq!(recovered, signer.address());
    }

    #[test]
    fn test_case_insensitive_address_comparison() {
        let signer = PrivateKeySigner::random();
        let signature = sign(&signer, MESSAGE);

        let lowercase = signer.address().to_string().to_lowercase();
        assert!(WalletVerifier::verify(&lowercase, MESSAGE, &signature).is_ok());
    }

    #[test]
    fn test_wrong_signer_is_rejected() {
        let signer = PrivateKeySigner::random();
        let other = PrivateKeySigner::random();
        let signature = sign(&other, MESSAGE);

        let err =
            WalletVerifier::verify(&signer.address().to_string(), MESSAGE, &signature).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn test_signature_over_different_message_is_rejected() {
        let signer = PrivateKeySigner::random();
        let signature = sign(&signer, "something else entirely");

        assert!(WalletVerifier::verify(&signer.address().to_string(), MESSAGE, &signature).is_err());
    }

    #[test]
    fn test_malformed_inputs_are_rejected() {
        let signer = PrivateKeySigner::random();
        let address = signer.address().to_string();

        assert!(WalletVerifier::verify("not-an-address", MESSAGE, "0x00").is_err());
        assert!(WalletVerifier::verify(&address, MESSAGE, "0xzz").is_err());
        // odd-length hex
        assert!(WalletVerifier::verify(&address, MESSAGE, "0xabc").is_err());
        // wrong length for a 65-byte recoverable signature
        assert!(WalletVerifier::verify(&address, MESSAGE, "0xdeadbeef").is_err());
    }

    #[test]
    fn test_connect_challenge_names_wallet() {
        let challenge = connect_challenge("0x1234");
        assert!(challenge.contains("0x1234"));

        // distinct nonce per attempt
        assert_ne!(challenge, connect_challenge("0x1234"));
    }
}
