//! Citizenship proofs and selective disclosure across the prover,
//! disclosure, and registry layers.

use zkid_claims::CitizenshipProof;
use zkid_core::{IdentityRef, Timestamp};
use zkid_crypto::{Salt, SigningKey};
use zkid_registry::{AuthorityState, RegistryError, RegistryEvent};

fn identity(byte: u8) -> IdentityRef {
    IdentityRef::from_bytes([byte; 32])
}

fn timestamp() -> Timestamp {
    Timestamp::from_epoch_seconds(1_700_000_000)
}

fn build_proof(raw: &str, salt_material: &[u8], key: &SigningKey) -> CitizenshipProof {
    let salt = Salt::from_bytes(salt_material).unwrap();
    CitizenshipProof::build(raw, &salt, &identity(1), &identity(2), timestamp(), key).unwrap()
}

#[test]
fn citizenship_proof_verifies_and_emits_distinct_event() {
    let key = SigningKey::generate();
    let proof = build_proof("India", b"citizen-salt", &key);

    let mut registry = AuthorityState::deploy(identity(0xAA));
    let receipt = registry
        .verify_citizenship_proof(
            identity(1),
            proof.attribute_digest,
            "India",
            proof.proof_value,
            identity(2),
            timestamp(),
        )
        .unwrap();

    assert!(matches!(receipt.event, RegistryEvent::CitizenshipVerified { .. }));
    assert_eq!(receipt.event.kind(), "citizenship_verified");
}

#[test]
fn expected_value_is_case_and_whitespace_insensitive() {
    let key = SigningKey::generate();
    let proof = build_proof("India", b"citizen-salt", &key);
    let vk = key.verifying_key();

    let mut registry = AuthorityState::deploy(identity(0xAA));
    for expected in ["india", "INDIA", "  india  "] {
        registry
            .verify_citizenship_proof(
                identity(1),
                proof.attribute_digest,
                expected,
                proof.proof_value,
                identity(2),
                timestamp(),
            )
            .unwrap();
        assert!(proof.disclosure.verify(expected, &vk).is_ok());
    }
    assert_eq!(registry.total_verifications(), 3);
}

#[test]
fn wrong_expected_value_fails_everywhere() {
    let key = SigningKey::generate();
    let proof = build_proof("India", b"citizen-salt", &key);

    let mut registry = AuthorityState::deploy(identity(0xAA));
    let result = registry.verify_citizenship_proof(
        identity(1),
        proof.attribute_digest,
        "USA",
        proof.proof_value,
        identity(2),
        timestamp(),
    );
    assert_eq!(result.unwrap_err(), RegistryError::InvalidProof);
    assert!(proof.disclosure.verify("USA", &key.verifying_key()).is_err());
}

#[test]
fn wrong_salt_fails_commitment_check() {
    let key = SigningKey::generate();
    let proof = build_proof("India", b"citizen-salt", &key);
    let other = build_proof("India", b"other-salt", &key);

    let mut registry = AuthorityState::deploy(identity(0xAA));
    // Digest from one salt, proof value from the other.
    let result = registry.verify_citizenship_proof(
        identity(1),
        other.attribute_digest,
        "India",
        proof.proof_value,
        identity(2),
        timestamp(),
    );
    assert_eq!(result.unwrap_err(), RegistryError::InvalidProof);
}

#[test]
fn disclosure_bundle_round_trips_through_json() {
    let key = SigningKey::generate();
    let proof = build_proof("united   arab  emirates", b"citizen-salt", &key);
    assert_eq!(proof.normalized_value, "united arab emirates");

    let json = serde_json::to_string(&proof.disclosure).unwrap();
    let restored: zkid_claims::DisclosureBundle = serde_json::from_str(&json).unwrap();
    assert!(restored.verify("United Arab Emirates", &key.verifying_key()).is_ok());
}
