//! # Registry Error Types
//!
//! Each variant is the terminal outcome of one transition attempt.
//! The first failing check short-circuits; nothing is retried
//! internally, and no failure path mutates state.

use thiserror::Error;

/// Errors returned by verification state machine transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Malformed parameters (out-of-range minimum age or similar).
    /// Recoverable by resubmitting corrected input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The proof value does not equal the recomputed commitment.
    /// A corrupted submission, a stale or mismatched salt, or a forgery.
    #[error("proof value does not match recomputed commitment")]
    InvalidProof,

    /// The supplied commitment does not match the claim fields it
    /// commits to. Distinct from `InvalidProof`: the inconsistency is
    /// between claim and commitment, not proof and commitment.
    #[error("commitment does not match claim fields")]
    CommitmentMismatch,

    /// The claim's expiry is not in the future. Permanent for this
    /// claim instance.
    #[error("credential expired")]
    CredentialExpired,

    /// Caller is not the owner. Permanent for this caller.
    #[error("caller is not the registry owner")]
    Unauthorized,

    /// Issuer trust enforcement is on and the issuer has not been added.
    #[error("issuer is not in the trusted set")]
    UntrustedIssuer,
}
