//! # Claim Encoder
//!
//! The canonical field sequence for each claim family. These functions
//! are called by both the prover-side builder and the verification state
//! machine, so the sequences here are the interoperability contract of
//! the protocol.
//!
//! ## Sequences
//!
//! | Family | Sequence |
//! |---|---|
//! | Age | `[age_digest, min_age, subject limbs, issuer limbs, timestamp]` |
//! | KYC | `[kyc_digest, subject limbs, issuer limbs, KYC flag]` |
//! | Citizenship | `[attr_digest, expected_normalized, subject limbs, issuer limbs, timestamp]` |
//! | Generic | `[issuer limbs, subject limbs, claim_type, claim_value, issued_at, expires_at]` |
//!
//! Identity limbs are consumed in order 0→3 (most significant bytes
//! first). Timestamps embed as epoch seconds.

use zkid_core::{Felt, IdentityRef, Timestamp};
use zkid_crypto::{hash_elements, string_felt};

use crate::claim::CredentialClaim;
use crate::error::ClaimError;
use crate::normalize::normalize_attribute;

/// Upper bound on any minimum-age parameter.
pub const MAX_MINIMUM_AGE: u8 = 120;

/// Protocol constant marking the KYC-completed position in the KYC
/// sequence.
const KYC_FLAG: u64 = 1;

fn push_limbs(elements: &mut Vec<Felt>, identity: &IdentityRef) {
    elements.extend_from_slice(&identity.limbs());
}

/// Computes the age-above-threshold commitment.
///
/// `age_digest` is the salted pre-commitment of the subject's actual
/// age; `min_age` is the threshold asserted by the proof. Rejects
/// thresholds above [`MAX_MINIMUM_AGE`].
pub fn age_commitment(
    age_digest: Felt,
    min_age: u8,
    subject: &IdentityRef,
    issuer: &IdentityRef,
    timestamp: Timestamp,
) -> Result<Felt, ClaimError> {
    if min_age > MAX_MINIMUM_AGE {
        return Err(ClaimError::InvalidInput(format!(
            "minimum age {min_age} out of range 0..={MAX_MINIMUM_AGE}"
        )));
    }
    let mut elements = Vec::with_capacity(11);
    elements.push(age_digest);
    elements.push(Felt::from_u64(u64::from(min_age)));
    push_limbs(&mut elements, subject);
    push_limbs(&mut elements, issuer);
    elements.push(Felt::from_u64(timestamp.epoch_seconds()));
    Ok(hash_elements(&elements))
}

/// Computes the KYC-completion commitment.
pub fn kyc_commitment(kyc_digest: Felt, subject: &IdentityRef, issuer: &IdentityRef) -> Felt {
    let mut elements = Vec::with_capacity(10);
    elements.push(kyc_digest);
    push_limbs(&mut elements, subject);
    push_limbs(&mut elements, issuer);
    elements.push(Felt::from_u64(KYC_FLAG));
    hash_elements(&elements)
}

/// Computes the citizenship / name-match commitment.
///
/// `expected_value` is normalized here before embedding, so callers on
/// both sides may pass the raw string.
pub fn citizenship_commitment(
    attribute_digest: Felt,
    expected_value: &str,
    subject: &IdentityRef,
    issuer: &IdentityRef,
    timestamp: Timestamp,
) -> Felt {
    let normalized = normalize_attribute(expected_value);
    let mut elements = Vec::with_capacity(11);
    elements.push(attribute_digest);
    elements.push(string_felt(&normalized));
    push_limbs(&mut elements, subject);
    push_limbs(&mut elements, issuer);
    elements.push(Felt::from_u64(timestamp.epoch_seconds()));
    hash_elements(&elements)
}

/// Computes the generic typed-claim commitment over a claim's fields.
pub fn credential_commitment(claim: &CredentialClaim) -> Felt {
    let mut elements = Vec::with_capacity(12);
    push_limbs(&mut elements, &claim.issuer);
    push_limbs(&mut elements, &claim.subject);
    elements.push(claim.claim_type.as_felt());
    elements.push(Felt::from_u64(claim.claim_value));
    elements.push(Felt::from_u64(claim.issued_at.epoch_seconds()));
    elements.push(Felt::from_u64(claim.expires_at.epoch_seconds()));
    hash_elements(&elements)
}
