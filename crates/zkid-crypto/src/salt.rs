//! # Commitment Salts
//!
//! Salts blind the pre-commitment digest of a private attribute so that
//! verifiers cannot dictionary-attack low-entropy values (ages, country
//! names). A salt is always 32 bytes internally; arbitrary caller-supplied
//! material is compressed through SHA-256 under a salt-specific domain tag.
//!
//! ## Security Invariant
//!
//! A `Salt` cannot be constructed from empty bytes. Emptiness is rejected
//! at the type boundary, so downstream commitment builders never need to
//! re-check it. Salt material is zeroized on drop.

use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};
use zkid_core::Felt;

use crate::error::CryptoError;

/// Domain-separation tag for salt derivation.
const SALT_DOMAIN: &[u8] = b"zkid.salt.v1";

/// A 32-byte blinding salt for pre-commitment digests.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Salt([u8; 32]);

impl Salt {
    /// Derives a salt from caller-supplied material.
    ///
    /// Returns [`CryptoError::InvalidSalt`] for empty input. Non-empty
    /// material of any length is compressed to 32 bytes via SHA-256
    /// under the salt domain tag.
    pub fn from_bytes(material: &[u8]) -> Result<Self, CryptoError> {
        if material.is_empty() {
            return Err(CryptoError::InvalidSalt(
                "empty salt material".to_string(),
            ));
        }
        let mut hasher = Sha256::new();
        hasher.update(SALT_DOMAIN);
        hasher.update(material);
        Ok(Salt(hasher.finalize().into()))
    }

    /// Generates a fresh random salt from the OS CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        rand_core::RngCore::fill_bytes(&mut rand_core::OsRng, &mut bytes);
        Salt(bytes)
    }

    /// Returns the salt as a field element for commitment computation.
    pub fn as_felt(&self) -> Felt {
        Felt::from_bytes(self.0)
    }
}

impl std::fmt::Debug for Salt {
    // Salt material never appears in logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Salt(..)")
    }
}
