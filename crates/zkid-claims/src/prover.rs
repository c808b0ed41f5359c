//! # Prover-Side Proof Construction
//!
//! Builds the envelopes a holder submits for verification. Each builder
//! digests the private value with its salt, applies the canonical
//! encoder for the claim family, and returns the commitment together
//! with the proof value.
//!
//! In this envelope `proof_value == commitment`: the protocol's "proof"
//! is a hash-equality check, a placeholder for a succinct proof object
//! verified against a public key for the claim predicate. Downstream
//! verification code matches these semantics exactly; do not change one
//! side without the other.

use serde::{Deserialize, Serialize};
use zkid_core::{Felt, IdentityRef, Timestamp};
use zkid_crypto::{value_digest, Salt, SigningKey};

use crate::claim::CredentialClaim;
use crate::disclosure::DisclosureBundle;
use crate::encoder;
use crate::error::ClaimError;
use crate::normalize::normalize_attribute;

/// An age-above-threshold proof envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeProof {
    /// Salted pre-commitment of the subject's actual age.
    pub age_digest: Felt,
    /// The full commitment over the age sequence.
    pub commitment: Felt,
    /// Submitted proof value (equal to the commitment in this envelope).
    pub proof_value: Felt,
    /// The threshold this proof asserts.
    pub min_age: u8,
    /// The timestamp bound into the commitment.
    pub timestamp: Timestamp,
}

/// A KYC-completion proof envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycProof {
    /// Salted pre-commitment of the KYC status value.
    pub kyc_digest: Felt,
    /// The full commitment over the KYC sequence.
    pub commitment: Felt,
    /// Submitted proof value.
    pub proof_value: Felt,
}

/// A citizenship / name-match proof envelope with its disclosure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitizenshipProof {
    /// Salted pre-commitment of the normalized attribute string.
    pub attribute_digest: Felt,
    /// The normalized attribute value.
    pub normalized_value: String,
    /// The full commitment over the citizenship sequence.
    pub commitment: Felt,
    /// Submitted proof value.
    pub proof_value: Felt,
    /// Signed disclosure of (commitment, normalized value).
    pub disclosure: DisclosureBundle,
}

/// A generic typed-claim proof envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialProof {
    /// The claim the commitment covers.
    pub claim: CredentialClaim,
    /// The commitment over the claim's fields.
    pub commitment: Felt,
    /// Submitted proof value.
    pub proof_value: Felt,
}

impl AgeProof {
    /// Builds an age proof from the subject's private age and a salt.
    pub fn build(
        age: u64,
        salt: &Salt,
        min_age: u8,
        subject: &IdentityRef,
        issuer: &IdentityRef,
        timestamp: Timestamp,
    ) -> Result<Self, ClaimError> {
        let age_digest = value_digest(Felt::from_u64(age), salt);
        let commitment =
            encoder::age_commitment(age_digest, min_age, subject, issuer, timestamp)?;
        Ok(Self {
            age_digest,
            commitment,
            proof_value: commitment,
            min_age,
            timestamp,
        })
    }
}

impl KycProof {
    /// Builds a KYC proof from the private status value and a salt.
    pub fn build(
        kyc_status: u64,
        salt: &Salt,
        subject: &IdentityRef,
        issuer: &IdentityRef,
    ) -> Self {
        let kyc_digest = value_digest(Felt::from_u64(kyc_status), salt);
        let commitment = encoder::kyc_commitment(kyc_digest, subject, issuer);
        Self {
            kyc_digest,
            commitment,
            proof_value: commitment,
        }
    }
}

impl CitizenshipProof {
    /// Builds a citizenship proof from the raw attribute string.
    ///
    /// Normalizes the string, digests it with the salt, computes the
    /// commitment, and seals a disclosure bundle with the subject's
    /// signing key.
    pub fn build(
        raw_value: &str,
        salt: &Salt,
        subject: &IdentityRef,
        issuer: &IdentityRef,
        timestamp: Timestamp,
        signing_key: &SigningKey,
    ) -> Result<Self, ClaimError> {
        let normalized = normalize_attribute(raw_value);
        if normalized.is_empty() {
            return Err(ClaimError::InvalidInput(
                "attribute value is empty after normalization".to_string(),
            ));
        }
        let attribute_digest =
            value_digest(zkid_crypto::string_felt(&normalized), salt);
        let commitment = encoder::citizenship_commitment(
            attribute_digest,
            &normalized,
            subject,
            issuer,
            timestamp,
        );
        let disclosure =
            DisclosureBundle::seal(commitment, normalized.clone(), signing_key)?;
        Ok(Self {
            attribute_digest,
            normalized_value: normalized,
            commitment,
            proof_value: commitment,
            disclosure,
        })
    }
}

impl CredentialProof {
    /// Builds a generic claim proof over the claim's own fields.
    pub fn build(claim: CredentialClaim) -> Self {
        let commitment = encoder::credential_commitment(&claim);
        Self {
            claim,
            commitment,
            proof_value: commitment,
        }
    }
}
