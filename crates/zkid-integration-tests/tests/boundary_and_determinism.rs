//! Property suites: commitment determinism, single-field sensitivity,
//! and counter monotonicity under mixed success/failure workloads.

use proptest::prelude::*;
use zkid_claims::{encoder, AgeProof, KycProof};
use zkid_core::{Felt, IdentityRef, Timestamp};
use zkid_crypto::{value_digest, Salt};
use zkid_registry::AuthorityState;

fn identity(byte: u8) -> IdentityRef {
    IdentityRef::from_bytes([byte; 32])
}

fn ts(secs: u64) -> Timestamp {
    Timestamp::from_epoch_seconds(secs)
}

proptest! {
    #[test]
    fn age_commitments_are_deterministic(
        age in 0u64..150,
        min_age in 18u8..=120,
        secs in 0u64..4_000_000_000,
        subject_byte: u8,
        issuer_byte: u8,
        salt_material in proptest::collection::vec(any::<u8>(), 1..48),
    ) {
        let salt = Salt::from_bytes(&salt_material).unwrap();
        let subject = identity(subject_byte);
        let issuer = identity(issuer_byte);
        let a = AgeProof::build(age, &salt, min_age, &subject, &issuer, ts(secs)).unwrap();
        let b = AgeProof::build(age, &salt, min_age, &subject, &issuer, ts(secs)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn any_single_field_change_breaks_verification(
        age in 0u64..150,
        min_age in 18u8..120,
        secs in 1u64..4_000_000_000,
        field in 0usize..4,
    ) {
        let salt = Salt::from_bytes(b"property-salt").unwrap();
        let subject = identity(1);
        let issuer = identity(2);
        let proof = AgeProof::build(age, &salt, min_age, &subject, &issuer, ts(secs)).unwrap();

        let (subject2, issuer2, secs2, min2) = match field {
            0 => (identity(3), issuer, secs, min_age),
            1 => (subject, identity(3), secs, min_age),
            2 => (subject, issuer, secs + 1, min_age),
            _ => (subject, issuer, secs, min_age + 1),
        };
        let mut registry = AuthorityState::deploy(identity(0xAA));
        let result = registry.verify_age_proof(
            subject2, proof.age_digest, proof.proof_value, issuer2, ts(secs2), min2,
        );
        prop_assert!(result.is_err());
        prop_assert_eq!(registry.total_verifications(), 0);
    }

    #[test]
    fn verification_succeeds_iff_proof_equals_recomputed_commitment(
        age in 0u64..150,
        min_age in 18u8..=120,
        secs in 0u64..4_000_000_000,
        submitted in any::<u64>(),
    ) {
        let salt = Salt::from_bytes(b"property-salt").unwrap();
        let subject = identity(1);
        let issuer = identity(2);
        let digest = value_digest(Felt::from_u64(age), &salt);
        let expected = encoder::age_commitment(digest, min_age, &subject, &issuer, ts(secs)).unwrap();

        // Either the honestly computed commitment or an arbitrary value.
        let proof_value = if submitted % 2 == 0 { expected } else { Felt::from_u64(submitted) };
        let mut registry = AuthorityState::deploy(identity(0xAA));
        let result = registry.verify_age_proof(subject, digest, proof_value, issuer, ts(secs), min_age);
        prop_assert_eq!(result.is_ok(), proof_value == expected);
    }

    #[test]
    fn counter_counts_exactly_the_successes(
        outcomes in proptest::collection::vec(any::<bool>(), 1..20),
    ) {
        let salt = Salt::from_bytes(b"property-salt").unwrap();
        let subject = identity(1);
        let issuer = identity(2);
        let proof = KycProof::build(1, &salt, &subject, &issuer);

        let mut registry = AuthorityState::deploy(identity(0xAA));
        let mut expected = 0u64;
        for honest in outcomes {
            let submitted = if honest { proof.proof_value } else { Felt::from_u64(0) };
            let before = registry.total_verifications();
            let result = registry.verify_kyc_proof(subject, proof.kyc_digest, submitted, issuer);
            if honest {
                expected += 1;
                prop_assert_eq!(result.unwrap().total_verifications, before + 1);
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(registry.total_verifications(), before);
            }
        }
        prop_assert_eq!(registry.total_verifications(), expected);
        prop_assert_eq!(registry.events().len() as u64, expected);
    }
}
