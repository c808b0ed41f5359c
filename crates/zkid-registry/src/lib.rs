#![deny(missing_docs)]

//! # zkid-registry — Verification State Machine
//!
//! The verifier side of the protocol: a single always-live
//! [`AuthorityState`] holding the owner, the minimum-age policy, the
//! trusted-issuer accumulator, and the verification counter. Proof
//! verification recomputes the claim commitment with the canonical
//! encoders from `zkid-claims` and accepts a submission only when the
//! proof value equals it.
//!
//! ## Atomicity Invariant
//!
//! Every transition checks everything before mutating anything. A
//! rejected transition returns its typed error with state untouched;
//! a successful one commits the counter increment, any field updates,
//! and the emitted event together. Partial application is never
//! observable.

pub mod authority;
pub mod error;
pub mod event;

pub use authority::{AuthorityState, VerificationReceipt};
pub use error::RegistryError;
pub use event::RegistryEvent;
