//! # Hash Commitments
//!
//! The commitment function `H` used by every producer and consumer in a
//! deployment. Mismatched encodings between prover and verifier would
//! silently break proof verification, so the byte layout is fixed here
//! and nowhere else.
//!
//! ## Encoding
//!
//! `H(e_1, ..., e_n)` = SHA-256 over:
//!
//! 1. the domain-separation tag `zkid.commitment.v1`,
//! 2. the element count `n` as a big-endian `u64`,
//! 3. the 32 bytes of each element, in order.
//!
//! The count prefix keeps `H(a, b)` and `H(a || b)` distinct; the domain
//! tag keeps commitment digests from colliding with digests computed for
//! other purposes over the same bytes.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zkid_core::Felt;

use crate::salt::Salt;

/// Domain-separation tag for commitment computation.
const COMMITMENT_DOMAIN: &[u8] = b"zkid.commitment.v1";

/// Domain-separation tag for embedding normalized strings as elements.
const STRING_DOMAIN: &[u8] = b"zkid.string.v1";

/// Computes the commitment over an ordered sequence of field elements.
///
/// Order matters: `hash_elements(&[a, b]) != hash_elements(&[b, a])`.
pub fn hash_elements(elements: &[Felt]) -> Felt {
    let mut hasher = Sha256::new();
    hasher.update(COMMITMENT_DOMAIN);
    hasher.update((elements.len() as u64).to_be_bytes());
    for element in elements {
        hasher.update(element.as_bytes());
    }
    Felt::from_bytes(hasher.finalize().into())
}

/// Computes the salted pre-commitment digest of a private value.
///
/// The digest is what circulates in proofs; the raw value and salt stay
/// with the holder.
pub fn value_digest(value: Felt, salt: &Salt) -> Felt {
    hash_elements(&[value, salt.as_felt()])
}

/// Embeds a normalized string as a field element via SHA-256 over its
/// UTF-8 bytes, under a string-specific domain tag.
pub fn string_felt(normalized: &str) -> Felt {
    let mut hasher = Sha256::new();
    hasher.update(STRING_DOMAIN);
    hasher.update(normalized.as_bytes());
    Felt::from_bytes(hasher.finalize().into())
}

/// Compares two commitments in constant time.
///
/// Used on every proof-verification path so that the time taken does not
/// leak how many leading bytes of the expected commitment matched.
pub fn commitments_equal(a: &Felt, b: &Felt) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
