//! # Selective Disclosure
//!
//! A [`DisclosureBundle`] pairs a commitment with the normalized value it
//! was built from, authenticated by an Ed25519 signature over both. The
//! verifying side normalizes its expected value identically, compares,
//! and checks the signature; each check failing independently rejects.
//!
//! ## Security Invariant
//!
//! The signature covers the canonical serialization of
//! `(commitment, normalized_value)` via `CanonicalBytes`, so a bundle
//! cannot be re-bound to a different commitment or a differently
//! normalized value without invalidating the signature.

use serde::{Deserialize, Serialize};
use zkid_core::{CanonicalBytes, Felt};
use zkid_crypto::{Ed25519Signature, SigningKey, VerifyingKey};

use crate::error::ClaimError;
use crate::normalize::normalize_attribute;

/// The signed payload: what the disclosure signature actually covers.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DisclosurePayload<'a> {
    commitment: &'a Felt,
    normalized_value: &'a str,
}

/// A commitment disclosed together with its normalized value and an
/// authenticating signature over both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisclosureBundle {
    /// The commitment this disclosure belongs to.
    pub commitment: Felt,
    /// The normalized attribute value being disclosed.
    pub normalized_value: String,
    /// Hex-encoded Ed25519 signature over `(commitment, normalized_value)`.
    pub signature: String,
}

impl DisclosureBundle {
    /// Seals a disclosure: signs the canonical `(commitment, normalized
    /// value)` payload with the discloser's key.
    pub fn seal(
        commitment: Felt,
        normalized_value: String,
        signing_key: &SigningKey,
    ) -> Result<Self, ClaimError> {
        let payload = DisclosurePayload {
            commitment: &commitment,
            normalized_value: &normalized_value,
        };
        let canonical = CanonicalBytes::new(&payload)?;
        let signature = signing_key.sign(&canonical);
        Ok(Self {
            commitment,
            normalized_value,
            signature: signature.to_hex(),
        })
    }

    /// Verifies the bundle against an expected raw value and the claimed
    /// signer's verifying key.
    ///
    /// The expected value is normalized here, so callers pass it raw.
    /// Both the value comparison and the signature check must pass;
    /// either failing returns [`ClaimError::DisclosureMismatch`].
    pub fn verify(
        &self,
        expected_value: &str,
        signer: &VerifyingKey,
    ) -> Result<(), ClaimError> {
        let expected_normalized = normalize_attribute(expected_value);
        if expected_normalized != self.normalized_value {
            tracing::debug!(
                expected = %expected_normalized,
                disclosed = %self.normalized_value,
                "disclosure value mismatch"
            );
            return Err(ClaimError::DisclosureMismatch(
                "normalized value does not match disclosure".to_string(),
            ));
        }
        let signature = Ed25519Signature::from_hex(&self.signature)
            .map_err(|e| ClaimError::DisclosureMismatch(format!("malformed signature: {e}")))?;
        let payload = DisclosurePayload {
            commitment: &self.commitment,
            normalized_value: &self.normalized_value,
        };
        let canonical = CanonicalBytes::new(&payload)?;
        signer.verify(&canonical, &signature).map_err(|_| {
            ClaimError::DisclosureMismatch("disclosure signature invalid".to_string())
        })
    }
}
