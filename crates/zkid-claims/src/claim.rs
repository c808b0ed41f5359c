//! # Credential Claims
//!
//! A [`CredentialClaim`] is an immutable statement by an issuer about a
//! subject: a typed attribute with a numeric value and an issuance /
//! expiry window. Claims travel by serialized copy; there is no central
//! store, and whoever holds a copy can submit it for verification.

use serde::{Deserialize, Serialize};
use zkid_core::{Felt, IdentityRef, Timestamp};

/// The claim families recognized by the protocol.
///
/// Each family carries a stable integer tag used in the generic
/// commitment sequence. Tags for the built-in families are fixed;
/// deployments extend the protocol through `Custom` tags at 100 and
/// above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    /// Subject's age is at or above a threshold.
    AgeAboveThreshold,
    /// Subject has completed KYC with the issuer.
    KycCompleted,
    /// Subject's citizenship or name matches an expected value.
    Citizenship,
    /// Deployment-defined claim family; tags below 100 are reserved.
    Custom(u64),
}

impl ClaimType {
    /// Returns the stable integer tag for this claim family.
    pub fn tag(&self) -> u64 {
        match self {
            ClaimType::AgeAboveThreshold => 1,
            ClaimType::KycCompleted => 2,
            ClaimType::Citizenship => 3,
            ClaimType::Custom(tag) => *tag,
        }
    }

    /// Returns the tag embedded as a field element.
    pub fn as_felt(&self) -> Felt {
        Felt::from_u64(self.tag())
    }
}

/// An immutable typed claim issued about a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialClaim {
    /// Identity of the issuing party.
    pub issuer: IdentityRef,
    /// Identity of the subject the claim is about.
    pub subject: IdentityRef,
    /// Which claim family this is.
    pub claim_type: ClaimType,
    /// Numeric attribute value (semantics depend on the claim family).
    pub claim_value: u64,
    /// When the claim was issued.
    pub issued_at: Timestamp,
    /// When the claim stops being acceptable.
    pub expires_at: Timestamp,
}

impl CredentialClaim {
    /// Returns whether the claim is expired relative to `now`.
    ///
    /// A claim expiring exactly at `now` counts as expired; validity
    /// requires `expires_at > now`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(byte: u8) -> IdentityRef {
        IdentityRef::from_bytes([byte; 32])
    }

    fn claim(issued: u64, expires: u64) -> CredentialClaim {
        CredentialClaim {
            issuer: identity(1),
            subject: identity(2),
            claim_type: ClaimType::KycCompleted,
            claim_value: 1,
            issued_at: Timestamp::from_epoch_seconds(issued),
            expires_at: Timestamp::from_epoch_seconds(expires),
        }
    }

    #[test]
    fn built_in_tags_are_stable() {
        assert_eq!(ClaimType::AgeAboveThreshold.tag(), 1);
        assert_eq!(ClaimType::KycCompleted.tag(), 2);
        assert_eq!(ClaimType::Citizenship.tag(), 3);
        assert_eq!(ClaimType::Custom(100).tag(), 100);
    }

    #[test]
    fn expiry_is_exclusive_at_the_boundary() {
        let c = claim(1_000, 2_000);
        assert!(!c.is_expired(Timestamp::from_epoch_seconds(1_999)));
        assert!(c.is_expired(Timestamp::from_epoch_seconds(2_000)));
        assert!(c.is_expired(Timestamp::from_epoch_seconds(2_001)));
    }

    #[test]
    fn serde_round_trip() {
        let c = claim(1_000, 2_000);
        let json = serde_json::to_string(&c).unwrap();
        let back: CredentialClaim = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
