//! # Error Hierarchy
//!
//! Structured error types for the foundational layer, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Each variant carries the input that was rejected and the expected format
//! so that callers can diagnose a malformed submission without guesswork.

use thiserror::Error;

/// Top-level error type for the ZKID Stack foundational layer.
#[derive(Error, Debug)]
pub enum ZkidError {
    /// Canonicalization failure during signing-input computation.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Numeric attributes must be strings or integers.
    #[error("float values are not permitted in canonical representations; use string or integer: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed during canonicalization.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Validation errors for domain primitive newtypes.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Identity reference is not 32 bytes of valid lowercase hex.
    #[error("invalid identity reference: \"{0}\" (expected 64 hex characters)")]
    InvalidIdentity(String),

    /// Field element is not 32 bytes of valid hex.
    #[error("invalid field element: \"{0}\" (expected 64 hex characters)")]
    InvalidFieldElement(String),

    /// Timestamp string is not valid UTC ISO 8601.
    #[error("invalid timestamp: \"{value}\" ({reason})")]
    InvalidTimestamp {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}
