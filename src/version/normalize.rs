//! Version normalization
//!
//! Canonicalizes a raw tag into a comparable [`NormalizedVersion`]:
//! strip one leading `v`, keep calendar dates unchanged, parse the part
//! before the first hyphen as dotted integers, and expand bare integers to
//! full three-component form. A hyphen suffix naming a pre-release stage
//! (`-rc1`, `-beta.2`) is kept so it orders before the bare release;
//! platform suffixes (`-alpine`, `-bullseye`) are dropped.

use crate::domain::{DottedVersion, NormalizedVersion};
use crate::version::classify::is_calendar_date;

/// Normalize a raw version tag, or None when it cannot be normalized
///
/// None is a discard signal for the caller, never a fatal error at this
/// layer.
pub fn normalize(tag: &str) -> Option<NormalizedVersion> {
    let stripped = tag.strip_prefix('v').unwrap_or(tag);

    if is_calendar_date(stripped) {
        return Some(NormalizedVersion::Date(stripped.to_string()));
    }

    let (version_part, suffix) = match stripped.split_once('-') {
        Some((core, rest)) => (core, Some(rest)),
        None => (stripped, None),
    };

    let dotted = if is_bare_integer(version_part) {
        DottedVersion::parse(&format!("{}.0.0", version_part))
    } else {
        match suffix {
            Some(rest) if is_prerelease_suffix(rest) => {
                DottedVersion::parse(&format!("{}-{}", version_part, rest))
            }
            // Suffixes like -alpine do not participate in ordering
            _ => DottedVersion::parse(version_part),
        }
    }?;

    Some(NormalizedVersion::Numeric(dotted))
}

/// True when the string is a plain ASCII integer with no dots
fn is_bare_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// True when the suffix names a pre-release stage rather than a platform
/// variant
fn is_prerelease_suffix(suffix: &str) -> bool {
    let lower = suffix.to_ascii_lowercase();
    ["alpha", "beta", "rc", "pre"]
        .iter()
        .any(|stage| lower.starts_with(stage))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(tag: &str) -> NormalizedVersion {
        match normalize(tag) {
            Some(v @ NormalizedVersion::Numeric(_)) => v,
            other => panic!("expected numeric normalization for '{}', got {:?}", tag, other),
        }
    }

    #[test]
    fn test_strips_v_prefix() {
        assert_eq!(numeric("v1.21.0"), numeric("1.21.0"));
    }

    #[test]
    fn test_calendar_date_kept_unchanged() {
        assert_eq!(
            normalize("2024-01-15"),
            Some(NormalizedVersion::Date("2024-01-15".to_string()))
        );
    }

    #[test]
    fn test_platform_suffix_discarded() {
        assert_eq!(numeric("1.21.0-alpine"), numeric("1.21.0"));
        assert_eq!(numeric("3.9.18-slim"), numeric("3.9.18"));
    }

    #[test]
    fn test_prerelease_suffix_kept() {
        assert_ne!(numeric("2.0.0-rc1"), numeric("2.0.0"));
        assert!(numeric("2.0.0-rc1") < numeric("2.0.0"));
        assert!(numeric("2.0.0-rc.1") < numeric("2.0.0-rc.2"));
        assert!(numeric("1.0.0-alpha") < numeric("1.0.0-beta"));
    }

    #[test]
    fn test_bare_integer_expands_to_three_components() {
        assert_eq!(numeric("20").to_string(), "20.0.0");
        assert_eq!(numeric("20"), numeric("20.0.0"));
    }

    #[test]
    fn test_idempotent_on_numeric_output() {
        let once = numeric("1.21");
        let twice = normalize(&once.to_string()).unwrap();
        assert_eq!(once, twice);

        let once = numeric("v2.0.0-alpine");
        let twice = normalize(&once.to_string()).unwrap();
        assert_eq!(once, twice);

        let once = numeric("2.0.0-rc.1");
        let twice = normalize(&once.to_string()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unnormalizable_returns_none() {
        assert!(normalize("latest").is_none());
        assert!(normalize("canary").is_none());
        assert!(normalize("alpine-3.18").is_none());
        assert!(normalize("").is_none());
        assert!(normalize("v").is_none());
    }

    #[test]
    fn test_dates_do_not_lose_their_dialect() {
        // A date must never fall through to the numeric path
        let v = normalize("2024-01-15").unwrap();
        assert!(matches!(v, NormalizedVersion::Date(_)));
    }

    #[test]
    fn test_is_bare_integer() {
        assert!(is_bare_integer("20"));
        assert!(!is_bare_integer("1.2"));
        assert!(!is_bare_integer("x"));
        assert!(!is_bare_integer(""));
    }

    #[test]
    fn test_is_prerelease_suffix() {
        assert!(is_prerelease_suffix("rc1"));
        assert!(is_prerelease_suffix("RC.2"));
        assert!(is_prerelease_suffix("beta"));
        assert!(is_prerelease_suffix("alpha.1"));
        assert!(is_prerelease_suffix("pre2"));
        assert!(!is_prerelease_suffix("alpine"));
        assert!(!is_prerelease_suffix("bullseye"));
        assert!(!is_prerelease_suffix("slim"));
    }
}
