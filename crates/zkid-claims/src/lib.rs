#![deny(missing_docs)]

//! # zkid-claims — Claim Encoding and Proof Construction
//!
//! Converts typed claims (age threshold, KYC completion, citizenship
//! string, generic attribute) plus their binding context (subject, issuer,
//! timestamps, salts) into the canonical field-element sequences fed to
//! the commitment function, and builds the prover-side envelopes submitted
//! for verification.
//!
//! ## Security Invariant
//!
//! The encoder functions in [`encoder`] are the single definition of each
//! claim family's field ordering. Prover and verifier both call them;
//! there is no second copy of a sequence anywhere in the stack. Violating
//! the field order, omitting a field, or using a different salt produces
//! a non-matching commitment, which is the mechanism that rejects forged
//! or replayed proofs.

pub mod claim;
pub mod disclosure;
pub mod encoder;
pub mod error;
pub mod normalize;
pub mod prover;

pub use claim::{ClaimType, CredentialClaim};
pub use disclosure::DisclosureBundle;
pub use encoder::{
    age_commitment, citizenship_commitment, credential_commitment, kyc_commitment,
    MAX_MINIMUM_AGE,
};
pub use error::ClaimError;
pub use normalize::normalize_attribute;
pub use prover::{AgeProof, CitizenshipProof, CredentialProof, KycProof};
