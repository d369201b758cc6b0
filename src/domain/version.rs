//! Normalized version values and their ordering
//!
//! Two dialects exist and are fixed at creation: dotted-integer (semantic
//! style) and ISO calendar date. Date values order lexically among
//! themselves; dotted-integer values order component-wise with zero padding
//! and semver pre-release precedence.

use std::cmp::Ordering;
use std::fmt;

/// The dialect of a normalized version value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Dotted-integer version (1.21, 2.0.0, 20.0.0)
    Numeric,
    /// ISO calendar date (2024-01-15)
    Date,
}

/// A dotted-integer version with an optional pre-release chain
///
/// Equality and ordering pad the shorter component list with zeros, so
/// `1.0` and `1.0.0` compare equal. A release orders after any pre-release
/// of the same core.
#[derive(Debug, Clone)]
pub struct DottedVersion {
    parts: Vec<u64>,
    pre: Option<String>,
}

impl DottedVersion {
    /// Parse a dotted-integer version token, with an optional `-pre` chain
    ///
    /// Returns None unless every dot-separated group of the core is a plain
    /// ASCII integer.
    pub fn parse(s: &str) -> Option<Self> {
        let (core, pre) = match s.split_once('-') {
            Some((_, "")) => return None,
            Some((core, pre)) => (core, Some(pre.to_string())),
            None => (s, None),
        };

        if core.is_empty() {
            return None;
        }

        let mut parts = Vec::new();
        for group in core.split('.') {
            if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            parts.push(group.parse().ok()?);
        }

        Some(Self { parts, pre })
    }

    /// The numeric components
    pub fn parts(&self) -> &[u64] {
        &self.parts
    }

    /// The pre-release chain, if any
    pub fn pre(&self) -> Option<&str> {
        self.pre.as_deref()
    }
}

impl fmt::Display for DottedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self
            .parts
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(".");
        match &self.pre {
            Some(pre) => write!(f, "{}-{}", core, pre),
            None => write!(f, "{}", core),
        }
    }
}

impl Ord for DottedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        for i in 0..len {
            let a = self.parts.get(i).copied().unwrap_or(0);
            let b = other.parts.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }

        match (&self.pre, &other.pre) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => compare_prerelease(a, b),
        }
    }
}

impl PartialOrd for DottedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Manual PartialEq so that zero-padded comparison stays consistent with Ord
impl PartialEq for DottedVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DottedVersion {}

/// Compare two pre-release chains per semver precedence
///
/// Identifier-wise: numeric identifiers compare as integers and sort before
/// alphanumeric ones; alphanumeric identifiers compare lexically; a shorter
/// chain sorts first when it is a prefix of the longer.
fn compare_prerelease(a: &str, b: &str) -> Ordering {
    let mut ids_a = a.split('.');
    let mut ids_b = b.split('.');
    loop {
        match (ids_a.next(), ids_b.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(nx), Ok(ny)) => nx.cmp(&ny),
                    (Ok(_), Err(_)) => Ordering::Less,
                    (Err(_), Ok(_)) => Ordering::Greater,
                    (Err(_), Err(_)) => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// A version value in canonical, comparable form
///
/// The dialect is fixed at creation and never reinterpreted. Ord orders
/// within a dialect per the dialect rules; the cross-dialect arms use a
/// fixed rank (Date before Numeric) only so the order stays total. Both
/// the comparator and latest-selection reject mixed dialects, so that rank
/// never decides an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedVersion {
    /// Dotted-integer dialect
    Numeric(DottedVersion),
    /// Calendar-date dialect, kept as the validated `YYYY-MM-DD` string
    Date(String),
}

impl NormalizedVersion {
    /// The dialect of this value
    pub fn dialect(&self) -> Dialect {
        match self {
            NormalizedVersion::Numeric(_) => Dialect::Numeric,
            NormalizedVersion::Date(_) => Dialect::Date,
        }
    }
}

impl fmt::Display for NormalizedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizedVersion::Numeric(v) => write!(f, "{}", v),
            NormalizedVersion::Date(d) => write!(f, "{}", d),
        }
    }
}

impl Ord for NormalizedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (NormalizedVersion::Numeric(a), NormalizedVersion::Numeric(b)) => a.cmp(b),
            (NormalizedVersion::Date(a), NormalizedVersion::Date(b)) => a.cmp(b),
            (NormalizedVersion::Date(_), NormalizedVersion::Numeric(_)) => Ordering::Less,
            (NormalizedVersion::Numeric(_), NormalizedVersion::Date(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for NormalizedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A raw tag paired with its normalized form
///
/// Only tags that both classify as a release tag and normalize successfully
/// become candidates; everything else is discarded before selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCandidate {
    /// The tag exactly as published
    pub tag: String,
    /// The comparable form
    pub normalized: NormalizedVersion,
}
