//! # Ed25519 Signing and Verification
//!
//! Ed25519 signatures for disclosure bundles and issuer attestations.
//!
//! ## Security Invariant
//!
//! Signing and verification take [`CanonicalBytes`](zkid_core::CanonicalBytes)
//! rather than raw bytes, so a signature can only ever cover a properly
//! canonicalized payload. This prevents signature malleability from
//! non-canonical serialization.

use ed25519_dalek::{Signer, Verifier};
use zkid_core::{CanonicalBytes, IdentityRef};

use crate::error::CryptoError;

/// An Ed25519 digital signature (64 bytes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ed25519Signature(ed25519_dalek::Signature);

impl Ed25519Signature {
    /// Renders the signature as 128 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        self.0
            .to_bytes()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect()
    }

    /// Parses a signature from 128 hex characters.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        if hex.len() != 128 {
            return Err(CryptoError::InvalidSignatureLength(hex.len() / 2));
        }
        let mut bytes = [0u8; 64];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let pair = std::str::from_utf8(chunk)
                .map_err(|_| CryptoError::HexDecode(hex.to_string()))?;
            bytes[i] = u8::from_str_radix(pair, 16)
                .map_err(|_| CryptoError::HexDecode(hex.to_string()))?;
        }
        Ok(Self(ed25519_dalek::Signature::from_bytes(&bytes)))
    }
}

/// An Ed25519 signing (private) key.
///
/// Key material is zeroized on drop by `ed25519_dalek`'s `zeroize`
/// integration.
pub struct SigningKey {
    inner: ed25519_dalek::SigningKey,
}

impl SigningKey {
    /// Generates a new random key using the OS CSPRNG.
    pub fn generate() -> Self {
        Self {
            inner: ed25519_dalek::SigningKey::generate(&mut rand_core::OsRng),
        }
    }

    /// Creates a signing key from a raw 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            inner: ed25519_dalek::SigningKey::from_bytes(seed),
        }
    }

    /// Signs canonicalized bytes.
    pub fn sign(&self, data: &CanonicalBytes) -> Ed25519Signature {
        Ed25519Signature(self.inner.sign(data.as_bytes()))
    }

    /// Returns the corresponding verifying (public) key.
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey {
            inner: self.inner.verifying_key(),
        }
    }
}

impl std::fmt::Debug for SigningKey {
    // Private key material never appears in logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SigningKey(..)")
    }
}

/// An Ed25519 verifying (public) key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyingKey {
    inner: ed25519_dalek::VerifyingKey,
}

impl VerifyingKey {
    /// Creates a verifying key from its 32-byte compressed encoding.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, CryptoError> {
        let inner = ed25519_dalek::VerifyingKey::from_bytes(bytes)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Returns the 32-byte compressed encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.inner.to_bytes()
    }

    /// Derives the protocol identity for this key: its 32-byte
    /// compressed encoding, used directly as the participant reference.
    pub fn identity_ref(&self) -> IdentityRef {
        IdentityRef::from_bytes(self.inner.to_bytes())
    }

    /// Verifies a signature over canonicalized bytes.
    pub fn verify(
        &self,
        data: &CanonicalBytes,
        signature: &Ed25519Signature,
    ) -> Result<(), CryptoError> {
        self.inner
            .verify(data.as_bytes(), &signature.0)
            .map_err(|_| CryptoError::VerificationFailed)
    }
}
