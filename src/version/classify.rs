//! Release-tag classification
//!
//! Decides whether a raw registry tag plausibly denotes a release version.
//! Moving tags (latest, edge, ...), environment-prefixed variants, and
//! branch-like names are rejected before any normalization happens.

use regex::Regex;
use std::sync::LazyLock;

/// Tags that always denote a moving target, never a release
const MOVING_TAGS: &[&str] = &[
    "latest",
    "stable",
    "main",
    "master",
    "dev",
    "devel",
    "development",
    "test",
    "testing",
    "staging",
    "prod",
    "production",
    "edge",
    "nightly",
];

/// Names that mark an environment-prefixed variant when followed by a hyphen
const ENVIRONMENT_PREFIXES: &[&str] = &["latest", "stable", "main", "master"];

// v1.21.0, 1.21, 1.21.0-alpine, 2.0.0-rc1, 20
static VERSION_LIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?\d+(\.\d+)*(-[\w.-]+)?$").unwrap());

// 2024-01-15
static CALENDAR_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// True when the tag plausibly denotes a release version
pub fn is_release_tag(tag: &str) -> bool {
    let lower = tag.to_ascii_lowercase();

    if MOVING_TAGS.contains(&lower.as_str()) {
        return false;
    }

    // latest-alpine, stable-2024 and friends are environment variants
    let env_prefixed = ENVIRONMENT_PREFIXES
        .iter()
        .any(|p| lower.starts_with(p) && lower.as_bytes().get(p.len()) == Some(&b'-'));
    if env_prefixed {
        return false;
    }

    VERSION_LIKE_RE.is_match(tag) || CALENDAR_DATE_RE.is_match(tag)
}

/// True when the string is exactly an ISO calendar date (`YYYY-MM-DD`)
pub fn is_calendar_date(s: &str) -> bool {
    CALENDAR_DATE_RE.is_match(s)
}
