//! # Attribute Normalization
//!
//! Citizenship and name claims compare strings, so both the proving and
//! verifying side must normalize identically: fold case, trim edges,
//! collapse internal whitespace runs to single spaces. A one-sided
//! normalization change would make legitimate proofs spuriously fail.

/// Normalizes a raw attribute string for digesting and comparison.
///
/// `"  India "`, `"INDIA"` and `"india"` all normalize to `"india"`.
pub fn normalize_attribute(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
