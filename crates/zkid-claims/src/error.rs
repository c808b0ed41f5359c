//! # Claim Error Types

use thiserror::Error;
use zkid_core::CanonicalizationError;
use zkid_crypto::CryptoError;

/// Errors from claim encoding, proof construction, and disclosure.
#[derive(Error, Debug)]
pub enum ClaimError {
    /// Malformed parameters: out-of-range minimum age, empty salt, or
    /// similarly invalid input. Recoverable by resubmitting corrected
    /// input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Selective-disclosure value or signature check failed.
    #[error("disclosure mismatch: {0}")]
    DisclosureMismatch(String),

    /// Canonicalization of a disclosure payload failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// Underlying cryptographic operation failed.
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),
}
