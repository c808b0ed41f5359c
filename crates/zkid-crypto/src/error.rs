//! # Crypto Error Types
//!
//! Structured errors for signing, verification, and salt handling.

use thiserror::Error;

/// Errors from cryptographic operations.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Ed25519 signature verification failed.
    #[error("signature verification failed")]
    VerificationFailed,

    /// Signature bytes are not the expected 64-byte length.
    #[error("invalid signature length: expected 64 bytes, got {0}")]
    InvalidSignatureLength(usize),

    /// Public key bytes do not decode to a valid Ed25519 point.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Hex string could not be decoded.
    #[error("invalid hex encoding: \"{0}\"")]
    HexDecode(String),

    /// Salt material was rejected (for example, empty input).
    #[error("invalid salt: {0}")]
    InvalidSalt(String),
}
