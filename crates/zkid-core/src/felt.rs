//! # Field Elements
//!
//! `Felt` is the 32-byte value flowing through every commitment and
//! state-root computation in the stack. Integral attributes are embedded
//! big-endian in the last 8 bytes; digests occupy all 32.
//!
//! ## Security Invariant
//!
//! Equality between two `Felt` values compares all 32 bytes. Hex parsing
//! rejects anything that is not exactly 64 hex characters, so a truncated
//! or padded hex string can never alias a valid element.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::ValidationError;

/// A 32-byte field element used in commitments and state roots.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Felt([u8; 32]);

impl Felt {
    /// The all-zero element, used as the empty state root.
    pub const ZERO: Felt = Felt([0u8; 32]);

    /// Embeds a `u64` attribute value as a field element.
    ///
    /// The value is written big-endian into the last 8 bytes; the
    /// leading 24 bytes are zero.
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        Felt(bytes)
    }

    /// Wraps 32 raw bytes (typically a digest) as a field element.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Felt(bytes)
    }

    /// Returns the underlying 32 bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Renders the element as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parses a field element from exactly 64 hex characters.
    pub fn from_hex(hex: &str) -> Result<Self, ValidationError> {
        if hex.len() != 64 {
            return Err(ValidationError::InvalidFieldElement(hex.to_string()));
        }
        let mut bytes = [0u8; 32];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let pair = std::str::from_utf8(chunk)
                .map_err(|_| ValidationError::InvalidFieldElement(hex.to_string()))?;
            bytes[i] = u8::from_str_radix(pair, 16)
                .map_err(|_| ValidationError::InvalidFieldElement(hex.to_string()))?;
        }
        Ok(Felt(bytes))
    }
}

impl fmt::Display for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Felt({})", self.to_hex())
    }
}

impl Serialize for Felt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Felt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Felt::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_all_zero_bytes() {
        assert_eq!(Felt::ZERO.as_bytes(), &[0u8; 32]);
    }

    #[test]
    fn from_u64_big_endian_tail() {
        let felt = Felt::from_u64(1);
        let mut expected = [0u8; 32];
        expected[31] = 1;
        assert_eq!(felt.as_bytes(), &expected);
    }

    #[test]
    fn from_u64_max_value() {
        let felt = Felt::from_u64(u64::MAX);
        assert_eq!(&felt.as_bytes()[..24], &[0u8; 24]);
        assert_eq!(&felt.as_bytes()[24..], &[0xff; 8]);
    }

    #[test]
    fn hex_round_trip() {
        let felt = Felt::from_u64(0xdead_beef);
        let hex = felt.to_hex();
        assert_eq!(hex.len(), 64);
        let parsed = Felt::from_hex(&hex).unwrap();
        assert_eq!(parsed, felt);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(Felt::from_hex("abcd").is_err());
        assert!(Felt::from_hex(&"0".repeat(63)).is_err());
        assert!(Felt::from_hex(&"0".repeat(65)).is_err());
    }

    #[test]
    fn from_hex_rejects_non_hex_characters() {
        let bad = "zz".repeat(32);
        assert!(Felt::from_hex(&bad).is_err());
    }

    #[test]
    fn serde_round_trip_as_hex_string() {
        let felt = Felt::from_u64(42);
        let json = serde_json::to_string(&felt).unwrap();
        assert_eq!(json, format!("\"{}\"", felt.to_hex()));
        let back: Felt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, felt);
    }

    #[test]
    fn distinct_values_are_unequal() {
        assert_ne!(Felt::from_u64(1), Felt::from_u64(2));
        assert_ne!(Felt::from_u64(1), Felt::ZERO);
    }
}
