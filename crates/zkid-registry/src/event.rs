//! # Registry Events
//!
//! The closed union of facts the registry emits. Every successful
//! verification or administrative change appends exactly one variant to
//! the event log; observers read them in order and never see a
//! retraction.
//!
//! A closed enum (rather than an open payload bag) means every emission
//! site is exhaustively checked at compile time when a variant is added.

use serde::{Deserialize, Serialize};
use zkid_claims::ClaimType;
use zkid_core::{IdentityRef, Timestamp};

/// An append-only fact emitted by the verification state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// An age-above-threshold proof verified.
    AgeVerified {
        /// Subject whose age was proven.
        subject: IdentityRef,
        /// The threshold the proof asserted.
        minimum_age: u8,
        /// Timestamp bound into the commitment.
        timestamp: Timestamp,
    },
    /// A KYC-completion proof verified.
    KycVerified {
        /// Subject whose KYC status was proven.
        subject: IdentityRef,
        /// Issuer that attested the status.
        issuer: IdentityRef,
        /// When the verification was recorded.
        timestamp: Timestamp,
    },
    /// A citizenship / name-match proof verified.
    CitizenshipVerified {
        /// Subject whose attribute was proven.
        subject: IdentityRef,
        /// Issuer that attested the attribute.
        issuer: IdentityRef,
        /// Timestamp bound into the commitment.
        timestamp: Timestamp,
    },
    /// A generic typed-claim proof verified.
    CredentialVerified {
        /// Subject of the claim.
        subject: IdentityRef,
        /// Issuer of the claim.
        issuer: IdentityRef,
        /// Which claim family was verified.
        claim_type: ClaimType,
        /// Evaluation time supplied with the verification.
        timestamp: Timestamp,
    },
    /// An issuer was folded into the trusted-issuer accumulator.
    IssuerAdded {
        /// The issuer that was added.
        issuer: IdentityRef,
        /// When the issuer was added.
        timestamp: Timestamp,
    },
    /// The minimum-age policy changed.
    MinimumAgeUpdated {
        /// Policy value before the change.
        old: u8,
        /// Policy value after the change.
        new: u8,
    },
    /// Registry ownership moved to a new identity.
    OwnershipTransferred {
        /// Previous owner.
        old: IdentityRef,
        /// New owner.
        new: IdentityRef,
    },
}

impl RegistryEvent {
    /// Returns the stable kind name for logging and dispatch.
    pub fn kind(&self) -> &'static str {
        match self {
            RegistryEvent::AgeVerified { .. } => "age_verified",
            RegistryEvent::KycVerified { .. } => "kyc_verified",
            RegistryEvent::CitizenshipVerified { .. } => "citizenship_verified",
            RegistryEvent::CredentialVerified { .. } => "credential_verified",
            RegistryEvent::IssuerAdded { .. } => "issuer_added",
            RegistryEvent::MinimumAgeUpdated { .. } => "minimum_age_updated",
            RegistryEvent::OwnershipTransferred { .. } => "ownership_transferred",
        }
    }
}
