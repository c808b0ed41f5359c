#![deny(missing_docs)]

//! # zkid-core — Foundational Types for the ZKID Stack
//!
//! This crate defines the foundational types that every other crate in the
//! workspace depends on. It has no internal crate dependencies — only `serde`,
//! `serde_json`, `thiserror`, and `chrono` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** A [`Felt`] is not a byte
//!    array and an [`IdentityRef`] is not a `Felt`. You cannot feed an
//!    identity where a field element is expected without going through its
//!    canonical decomposition.
//!
//! 2. **[`CanonicalBytes`] is the sole path to signed bytes.** Every
//!    signature in the stack is computed over bytes produced by
//!    `CanonicalBytes::new()`, which applies float rejection, datetime
//!    normalization, and compact sorted-key serialization.
//!
//! 3. **Identities are compared for equality, never ordered.** [`IdentityRef`]
//!    deliberately implements `Eq` but not `Ord`.
//!
//! 4. **[`ZkidError`] hierarchy.** Structured errors with `thiserror` — no
//!    `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod canonical;
pub mod error;
pub mod felt;
pub mod identity;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use error::{CanonicalizationError, ValidationError, ZkidError};
pub use felt::Felt;
pub use identity::IdentityRef;
pub use temporal::Timestamp;
