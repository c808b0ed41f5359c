#![deny(missing_docs)]

//! # zkid-crypto — Cryptographic Primitives for the ZKID Stack
//!
//! Hash commitments over field element sequences, salted pre-commitment
//! digests, and Ed25519 signing/verification over canonical bytes.
//!
//! ## Security Invariants
//!
//! - All commitment and digest computation flows through
//!   [`hash_elements`] and [`value_digest`], so every layer of the stack
//!   agrees on how attributes become field elements.
//! - Signing input is always `&CanonicalBytes` (never raw bytes), so a
//!   signature can only cover properly canonicalized payloads.
//! - Commitment comparison uses constant-time equality
//!   ([`commitments_equal`]) to avoid timing side channels on digest
//!   contents.

pub mod commitment;
pub mod ed25519;
pub mod error;
pub mod salt;

pub use commitment::{commitments_equal, hash_elements, string_felt, value_digest};
pub use ed25519::{Ed25519Signature, SigningKey, VerifyingKey};
pub use error::CryptoError;
pub use salt::Salt;
