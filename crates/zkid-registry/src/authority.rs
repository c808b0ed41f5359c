//! # Authority State
//!
//! The single durable record of the verification state machine: owner,
//! minimum-age policy, trusted-issuer accumulator, and the verification
//! counter, plus the append-only event log read by external observers.
//!
//! ## Security Invariant
//!
//! No transition mutates state before every check has passed. The
//! external ledger serializes concurrent transition attempts; this
//! component only guarantees that a rejected attempt is a pure no-op.
//!
//! ## Issuer Trust
//!
//! `add_trusted_issuer` folds each issuer into the running accumulator
//! `root' = H(root, issuer_digest, issuer limbs)`. Whether verification
//! transitions actually reject untrusted issuers is governed by the
//! explicit `enforce_issuer_trust` policy flag chosen at deployment;
//! with enforcement off, the accumulator is maintained but not
//! consulted.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use zkid_claims::{encoder, ClaimError, CredentialClaim};
use zkid_core::{Felt, IdentityRef, Timestamp};
use zkid_crypto::{commitments_equal, hash_elements};

use crate::error::RegistryError;
use crate::event::RegistryEvent;

/// Returned from every successful verification: the counter after the
/// transition and the event it appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReceipt {
    /// Counter value after this verification.
    pub total_verifications: u64,
    /// The event appended by this transition.
    pub event: RegistryEvent,
}

/// The verification state machine.
#[derive(Debug, Clone)]
pub struct AuthorityState {
    owner: IdentityRef,
    minimum_age: u8,
    trusted_issuers_root: Felt,
    total_verifications: u64,
    enforce_issuer_trust: bool,
    trusted_issuers: HashSet<IdentityRef>,
    events: Vec<RegistryEvent>,
}

impl AuthorityState {
    /// Deploys a registry with the caller as owner.
    ///
    /// Initial policy: minimum age 18, zero accumulator root, counter 0,
    /// issuer-trust enforcement off.
    pub fn deploy(owner: IdentityRef) -> Self {
        Self::deploy_with_policy(owner, false)
    }

    /// Deploys a registry with an explicit issuer-trust policy.
    pub fn deploy_with_policy(owner: IdentityRef, enforce_issuer_trust: bool) -> Self {
        tracing::info!(owner = %owner, enforce_issuer_trust, "registry deployed");
        Self {
            owner,
            minimum_age: 18,
            trusted_issuers_root: Felt::ZERO,
            total_verifications: 0,
            enforce_issuer_trust,
            trusted_issuers: HashSet::new(),
            events: Vec::new(),
        }
    }

    /// Current owner.
    pub fn owner(&self) -> &IdentityRef {
        &self.owner
    }

    /// Current minimum-age policy value.
    pub fn minimum_age(&self) -> u8 {
        self.minimum_age
    }

    /// Current trusted-issuer accumulator root.
    pub fn trusted_issuers_root(&self) -> &Felt {
        &self.trusted_issuers_root
    }

    /// Total successful verifications since deployment.
    pub fn total_verifications(&self) -> u64 {
        self.total_verifications
    }

    /// Whether verification transitions reject untrusted issuers.
    pub fn enforces_issuer_trust(&self) -> bool {
        self.enforce_issuer_trust
    }

    /// Whether an issuer has been added to the trusted set.
    pub fn is_trusted_issuer(&self, issuer: &IdentityRef) -> bool {
        self.trusted_issuers.contains(issuer)
    }

    /// The append-only event log, oldest first.
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }

    fn check_issuer_trust(&self, issuer: &IdentityRef) -> Result<(), RegistryError> {
        if self.enforce_issuer_trust && !self.trusted_issuers.contains(issuer) {
            tracing::warn!(issuer = %issuer, "rejected proof from untrusted issuer");
            return Err(RegistryError::UntrustedIssuer);
        }
        Ok(())
    }

    fn commit(&mut self, event: RegistryEvent) -> VerificationReceipt {
        self.total_verifications += 1;
        tracing::info!(
            kind = event.kind(),
            total_verifications = self.total_verifications,
            "verification recorded"
        );
        self.events.push(event.clone());
        VerificationReceipt {
            total_verifications: self.total_verifications,
            event,
        }
    }

    /// Verifies an age-above-threshold proof.
    ///
    /// `min_age` is the threshold asserted by the proof, not the policy
    /// value; the policy acts only as a lower sanity bound. The
    /// commitment is recomputed with the asserted threshold, so a proof
    /// built under a different threshold fails with `InvalidProof`.
    pub fn verify_age_proof(
        &mut self,
        subject: IdentityRef,
        age_digest: Felt,
        proof_value: Felt,
        issuer: IdentityRef,
        timestamp: Timestamp,
        min_age: u8,
    ) -> Result<VerificationReceipt, RegistryError> {
        if min_age < self.minimum_age {
            return Err(RegistryError::InvalidInput(format!(
                "asserted minimum age {min_age} below policy minimum {}",
                self.minimum_age
            )));
        }
        let commitment =
            encoder::age_commitment(age_digest, min_age, &subject, &issuer, timestamp)
                .map_err(claim_to_input)?;
        if !commitments_equal(&proof_value, &commitment) {
            tracing::warn!(subject = %subject, min_age, "age proof rejected");
            return Err(RegistryError::InvalidProof);
        }
        self.check_issuer_trust(&issuer)?;
        Ok(self.commit(RegistryEvent::AgeVerified {
            subject,
            minimum_age: min_age,
            timestamp,
        }))
    }

    /// Verifies a KYC-completion proof.
    pub fn verify_kyc_proof(
        &mut self,
        subject: IdentityRef,
        kyc_digest: Felt,
        proof_value: Felt,
        issuer: IdentityRef,
    ) -> Result<VerificationReceipt, RegistryError> {
        let commitment = encoder::kyc_commitment(kyc_digest, &subject, &issuer);
        if !commitments_equal(&proof_value, &commitment) {
            tracing::warn!(subject = %subject, "kyc proof rejected");
            return Err(RegistryError::InvalidProof);
        }
        self.check_issuer_trust(&issuer)?;
        Ok(self.commit(RegistryEvent::KycVerified {
            subject,
            issuer,
            timestamp: Timestamp::now(),
        }))
    }

    /// Verifies a citizenship / name-match proof.
    ///
    /// `expected_value` is normalized before embedding, so callers pass
    /// it raw; `"India"` and `"  INDIA "` verify identically.
    pub fn verify_citizenship_proof(
        &mut self,
        subject: IdentityRef,
        attribute_digest: Felt,
        expected_value: &str,
        proof_value: Felt,
        issuer: IdentityRef,
        timestamp: Timestamp,
    ) -> Result<VerificationReceipt, RegistryError> {
        let commitment = encoder::citizenship_commitment(
            attribute_digest,
            expected_value,
            &subject,
            &issuer,
            timestamp,
        );
        if !commitments_equal(&proof_value, &commitment) {
            tracing::warn!(subject = %subject, "citizenship proof rejected");
            return Err(RegistryError::InvalidProof);
        }
        self.check_issuer_trust(&issuer)?;
        Ok(self.commit(RegistryEvent::CitizenshipVerified {
            subject,
            issuer,
            timestamp,
        }))
    }

    /// Verifies a generic typed-claim proof against its claim.
    ///
    /// Check order is fixed: expiry, claim/commitment consistency,
    /// proof/commitment equality. Each failure is distinct so the caller
    /// can localize it.
    pub fn verify_credential_proof(
        &mut self,
        claim: &CredentialClaim,
        proof_value: Felt,
        commitment_hash: Felt,
        now: Timestamp,
    ) -> Result<VerificationReceipt, RegistryError> {
        if claim.is_expired(now) {
            tracing::warn!(subject = %claim.subject, "expired credential rejected");
            return Err(RegistryError::CredentialExpired);
        }
        let recomputed = encoder::credential_commitment(claim);
        if !commitments_equal(&recomputed, &commitment_hash) {
            return Err(RegistryError::CommitmentMismatch);
        }
        if !commitments_equal(&proof_value, &commitment_hash) {
            return Err(RegistryError::InvalidProof);
        }
        self.check_issuer_trust(&claim.issuer)?;
        Ok(self.commit(RegistryEvent::CredentialVerified {
            subject: claim.subject,
            issuer: claim.issuer,
            claim_type: claim.claim_type,
            timestamp: now,
        }))
    }

    /// Folds an issuer into the trusted-issuer accumulator. Owner only.
    pub fn add_trusted_issuer(
        &mut self,
        caller: IdentityRef,
        issuer: IdentityRef,
        issuer_digest: Felt,
    ) -> Result<(), RegistryError> {
        self.require_owner(&caller)?;
        let mut elements = Vec::with_capacity(6);
        elements.push(self.trusted_issuers_root);
        elements.push(issuer_digest);
        elements.extend_from_slice(&issuer.limbs());
        self.trusted_issuers_root = hash_elements(&elements);
        self.trusted_issuers.insert(issuer);
        tracing::info!(issuer = %issuer, root = %self.trusted_issuers_root, "trusted issuer added");
        self.events.push(RegistryEvent::IssuerAdded {
            issuer,
            timestamp: Timestamp::now(),
        });
        Ok(())
    }

    /// Replaces the minimum-age policy value. Owner only.
    pub fn update_minimum_age(
        &mut self,
        caller: IdentityRef,
        new_min_age: u8,
    ) -> Result<(), RegistryError> {
        self.require_owner(&caller)?;
        if new_min_age > encoder::MAX_MINIMUM_AGE {
            return Err(RegistryError::InvalidInput(format!(
                "minimum age {new_min_age} out of range 0..={}",
                encoder::MAX_MINIMUM_AGE
            )));
        }
        let old = self.minimum_age;
        self.minimum_age = new_min_age;
        tracing::info!(old, new = new_min_age, "minimum age updated");
        self.events
            .push(RegistryEvent::MinimumAgeUpdated { old, new: new_min_age });
        Ok(())
    }

    /// Transfers ownership to a new identity. Owner only.
    pub fn transfer_ownership(
        &mut self,
        caller: IdentityRef,
        new_owner: IdentityRef,
    ) -> Result<(), RegistryError> {
        self.require_owner(&caller)?;
        let old = self.owner;
        self.owner = new_owner;
        tracing::info!(old = %old, new = %new_owner, "ownership transferred");
        self.events
            .push(RegistryEvent::OwnershipTransferred { old, new: new_owner });
        Ok(())
    }

    fn require_owner(&self, caller: &IdentityRef) -> Result<(), RegistryError> {
        if caller != &self.owner {
            tracing::warn!(caller = %caller, "unauthorized admin call");
            return Err(RegistryError::Unauthorized);
        }
        Ok(())
    }
}

fn claim_to_input(err: ClaimError) -> RegistryError {
    RegistryError::InvalidInput(err.to_string())
}
