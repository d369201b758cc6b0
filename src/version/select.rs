//! Latest-version selection for the container path
//!
//! Filters a raw tag list through classification and normalization, then
//! picks the maximum surviving candidate. The two dialects are never
//! intermixed within one sort: a tag list whose survivors span both the
//! date and the numeric dialect fails instead of quietly picking a side.
//! Ties keep the first tag encountered, so the registry's own order breaks
//! exact duplicates.

use crate::domain::{NormalizedVersion, VersionCandidate};
use crate::error::VersionError;
use crate::version::classify::is_release_tag;
use crate::version::normalize::normalize;

/// Select the newest version candidate among raw tags
///
/// Fails with [`VersionError::NoVersionTags`] when nothing survives
/// classification and normalization, and with
/// [`VersionError::DialectMismatch`] when the survivors mix calendar-date
/// and numeric versions.
pub fn select_latest(tags: &[String]) -> Result<VersionCandidate, VersionError> {
    let mut best: Option<VersionCandidate> = None;

    for tag in tags {
        if !is_release_tag(tag) {
            continue;
        }
        let Some(normalized) = normalize(tag) else {
            continue;
        };
        match &best {
            Some(current) if normalized.dialect() != current.normalized.dialect() => {
                let (date, numeric) = match &normalized {
                    NormalizedVersion::Date(_) => (&normalized, &current.normalized),
                    NormalizedVersion::Numeric(_) => (&current.normalized, &normalized),
                };
                return Err(VersionError::dialect_mismatch(
                    date.to_string(),
                    numeric.to_string(),
                ));
            }
            // First encountered wins ties
            Some(current) if normalized <= current.normalized => {}
            _ => {
                best = Some(VersionCandidate {
                    tag: tag.clone(),
                    normalized,
                })
            }
        }
    }

    best.ok_or(VersionError::NoVersionTags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_selects_maximum_version() {
        let latest = select_latest(&tags(&["1.20", "1.21", "1.22", "latest", "edge"])).unwrap();
        assert_eq!(latest.tag, "1.22");
    }

    #[test]
    fn test_moving_tags_never_win() {
        let latest = select_latest(&tags(&["latest", "2.0.0", "edge", "1.9.0"])).unwrap();
        assert_eq!(latest.tag, "2.0.0");
    }

    #[test]
    fn test_original_tag_is_preserved() {
        // The published tag, not the normalized form, is reported
        let latest = select_latest(&tags(&["v1.2.0", "v1.10.0-alpine", "v1.9.0"])).unwrap();
        assert_eq!(latest.tag, "v1.10.0-alpine");
    }

    #[test]
    fn test_tie_keeps_first_encountered() {
        let latest = select_latest(&tags(&["1.21.0-alpine", "v1.21.0", "1.21"])).unwrap();
        assert_eq!(latest.tag, "1.21.0-alpine");
    }

    #[test]
    fn test_release_beats_its_release_candidate() {
        let latest = select_latest(&tags(&["2.0.0-rc1", "2.0.0", "1.9.0"])).unwrap();
        assert_eq!(latest.tag, "2.0.0");
    }

    #[test]
    fn test_unnormalizable_survivors_are_discarded() {
        // Classification alone is not enough; normalization must succeed too
        let latest = select_latest(&tags(&["1.5.0", "canary", "feature-x"])).unwrap();
        assert_eq!(latest.tag, "1.5.0");
    }

    #[test]
    fn test_only_moving_tags_is_an_error() {
        let err = select_latest(&tags(&["latest", "edge", "main"])).unwrap_err();
        assert!(matches!(err, VersionError::NoVersionTags));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(select_latest(&[]).is_err());
    }

    #[test]
    fn test_date_tags_select_newest_date() {
        let latest =
            select_latest(&tags(&["2024-01-15", "2024-03-01", "2023-12-31", "latest"])).unwrap();
        assert_eq!(latest.tag, "2024-03-01");
    }

    #[test]
    fn test_bare_integer_tags() {
        let latest = select_latest(&tags(&["19", "20", "21", "latest"])).unwrap();
        assert_eq!(latest.tag, "21");
    }

    #[test]
    fn test_mixed_dialect_survivors_are_an_error() {
        let err = select_latest(&tags(&["2024-01-15", "1.0.0"])).unwrap_err();
        match err {
            VersionError::DialectMismatch { date, numeric } => {
                assert_eq!(date, "2024-01-15");
                assert_eq!(numeric, "1.0.0");
            }
            other => panic!("expected DialectMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_mixed_dialect_is_an_error_in_either_order() {
        let err = select_latest(&tags(&["1.0.0", "2024-01-15"])).unwrap_err();
        match err {
            VersionError::DialectMismatch { date, numeric } => {
                assert_eq!(date, "2024-01-15");
                assert_eq!(numeric, "1.0.0");
            }
            other => panic!("expected DialectMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_mixed_dialect_detected_past_moving_tags() {
        // Rejected tags never mask a mixed survivor set
        let err = select_latest(&tags(&["latest", "2024-01-15", "edge", "2.1.0"])).unwrap_err();
        assert!(matches!(err, VersionError::DialectMismatch { .. }));
    }
}
