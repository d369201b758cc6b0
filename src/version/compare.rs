//! Dialect-aware version comparison
//!
//! The comparator re-normalizes its inputs and orders them within a single
//! dialect. Mixing a calendar-date value with a numeric one is a caller
//! error state and fails explicitly instead of guessing a cross-dialect
//! order.

use crate::domain::NormalizedVersion;
use crate::error::VersionError;
use crate::version::normalize::normalize;
use std::cmp::Ordering;

/// Compare two raw version strings
///
/// Returns Greater when `a` is newer than `b`. Fails when either input
/// cannot be normalized or when the dialects differ.
pub fn compare(a: &str, b: &str) -> Result<Ordering, VersionError> {
    let norm_a = normalize(a).ok_or_else(|| VersionError::unnormalizable(a))?;
    let norm_b = normalize(b).ok_or_else(|| VersionError::unnormalizable(b))?;
    compare_normalized(&norm_a, &norm_b)
}

/// Compare two already-normalized values within one dialect
pub fn compare_normalized(
    a: &NormalizedVersion,
    b: &NormalizedVersion,
) -> Result<Ordering, VersionError> {
    match (a, b) {
        (NormalizedVersion::Date(x), NormalizedVersion::Date(y)) => Ok(x.cmp(y)),
        (NormalizedVersion::Numeric(x), NormalizedVersion::Numeric(y)) => Ok(x.cmp(y)),
        (NormalizedVersion::Date(date), NormalizedVersion::Numeric(numeric))
        | (NormalizedVersion::Numeric(numeric), NormalizedVersion::Date(date)) => Err(
            VersionError::dialect_mismatch(date.clone(), numeric.to_string()),
        ),
    }
}
