//! # Temporal Types
//!
//! UTC-only timestamp type for the ZKID Stack. All timestamps carry
//! second-level precision and serialize with a `Z` suffix.
//!
//! ## Design Decision
//!
//! Credential issuance and expiry comparisons must be unambiguous across
//! jurisdictions, so everything is UTC. The type carries `Ord` because
//! expiry checks are ordinary comparisons against the evaluation time.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A UTC timestamp with second-level precision.
///
/// Serializes to ISO 8601 with `Z` suffix (e.g. `2026-01-15T12:00:00Z`).
/// Subsecond precision is truncated during canonicalization so digest
/// computation stays deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp representing the current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a `chrono::DateTime<Utc>`.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Creates a timestamp from seconds since the Unix epoch.
    ///
    /// Values before the epoch are clamped to the epoch; credential
    /// lifetimes never predate it.
    pub fn from_epoch_seconds(secs: u64) -> Self {
        let clamped = i64::try_from(secs).unwrap_or(i64::MAX);
        match Utc.timestamp_opt(clamped, 0) {
            chrono::LocalResult::Single(dt) => Self(dt),
            _ => Self(DateTime::<Utc>::MAX_UTC),
        }
    }

    /// Returns seconds since the Unix epoch, saturating at zero for
    /// pre-epoch values.
    pub fn epoch_seconds(&self) -> u64 {
        u64::try_from(self.0.timestamp()).unwrap_or(0)
    }

    /// Accesses the underlying `chrono::DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the timestamp as an ISO 8601 string with Z suffix,
    /// truncated to seconds (matching canonicalization rules).
    pub fn to_canonical_string(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_seconds_round_trip() {
        let ts = Timestamp::from_epoch_seconds(1_700_000_000);
        assert_eq!(ts.epoch_seconds(), 1_700_000_000);
    }

    #[test]
    fn epoch_zero_is_unix_epoch() {
        let ts = Timestamp::from_epoch_seconds(0);
        assert_eq!(ts.to_canonical_string(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn ordering_matches_chronology() {
        let earlier = Timestamp::from_epoch_seconds(100);
        let later = Timestamp::from_epoch_seconds(200);
        assert!(earlier < later);
    }

    #[test]
    fn canonical_string_has_z_suffix() {
        let ts = Timestamp::from_epoch_seconds(1_700_000_000);
        let s = ts.to_canonical_string();
        assert!(s.ends_with('Z'));
        assert_eq!(s, "2023-11-14T22:13:20Z");
    }

    #[test]
    fn serde_round_trip() {
        let ts = Timestamp::from_epoch_seconds(1_700_000_000);
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}
