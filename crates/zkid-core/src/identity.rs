//! # Identity References
//!
//! `IdentityRef` is the 32-byte participant identifier used for owners,
//! issuers and subjects throughout the stack. It is derived from a
//! public key or supplied directly as a digest.
//!
//! ## Security Invariant
//!
//! Identities are compared for equality only. There is deliberately no
//! `Ord` implementation: authorization decisions never depend on an
//! ordering between participants, and providing one invites accidental
//! use in range checks.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::ValidationError;
use crate::felt::Felt;

/// A 32-byte reference identifying a protocol participant.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityRef([u8; 32]);

impl IdentityRef {
    /// Wraps 32 raw bytes as an identity reference.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        IdentityRef(bytes)
    }

    /// Returns the underlying 32 bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Renders the identity as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parses an identity reference from exactly 64 hex characters.
    pub fn from_hex(hex: &str) -> Result<Self, ValidationError> {
        if hex.len() != 64 {
            return Err(ValidationError::InvalidIdentity(hex.to_string()));
        }
        let mut bytes = [0u8; 32];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let pair = std::str::from_utf8(chunk)
                .map_err(|_| ValidationError::InvalidIdentity(hex.to_string()))?;
            bytes[i] = u8::from_str_radix(pair, 16)
                .map_err(|_| ValidationError::InvalidIdentity(hex.to_string()))?;
        }
        Ok(IdentityRef(bytes))
    }

    /// Splits the identity into four 8-byte big-endian limbs, each
    /// embedded as a field element, in order from the most significant
    /// bytes to the least.
    ///
    /// This is the fixed encoding used when an identity participates in
    /// a commitment or accumulator computation.
    pub fn limbs(&self) -> [Felt; 4] {
        let mut limbs = [Felt::ZERO; 4];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(&self.0[i * 8..(i + 1) * 8]);
            *limb = Felt::from_u64(u64::from_be_bytes(buf));
        }
        limbs
    }

    /// Returns the identity as a single field element over all 32 bytes.
    pub fn as_felt(&self) -> Felt {
        Felt::from_bytes(self.0)
    }
}

impl fmt::Display for IdentityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for IdentityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityRef({})", self.to_hex())
    }
}

impl Serialize for IdentityRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for IdentityRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        IdentityRef::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IdentityRef {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        IdentityRef::from_bytes(bytes)
    }

    #[test]
    fn hex_round_trip() {
        let id = sample();
        let hex = id.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(IdentityRef::from_hex(&hex).unwrap(), id);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(IdentityRef::from_hex("00ff").is_err());
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        assert!(IdentityRef::from_hex(&"gh".repeat(32)).is_err());
    }

    #[test]
    fn limbs_are_big_endian_in_order() {
        let id = sample();
        let limbs = id.limbs();
        // First limb embeds bytes 0..8 of the identity.
        let expected = u64::from_be_bytes([0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(limbs[0], Felt::from_u64(expected));
        let expected_last = u64::from_be_bytes([24, 25, 26, 27, 28, 29, 30, 31]);
        assert_eq!(limbs[3], Felt::from_u64(expected_last));
    }

    #[test]
    fn as_felt_preserves_bytes() {
        let id = sample();
        assert_eq!(id.as_felt().as_bytes(), id.as_bytes());
    }

    #[test]
    fn serde_round_trip() {
        let id = sample();
        let json = serde_json::to_string(&id).unwrap();
        let back: IdentityRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
