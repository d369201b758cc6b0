//! Container tag listing via the crane CLI
//!
//! Shells out to `crane ls <repository>` (go-containerregistry) with a
//! bounded timeout and maps its failure modes onto the source error
//! taxonomy.

use crate::error::SourceError;
use crate::source::TagLister;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Default bound on a single crane invocation (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Tag lister backed by the crane binary
pub struct CraneLister {
    timeout: Duration,
}

impl CraneLister {
    /// Create a lister with the default timeout
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a lister with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for CraneLister {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagLister for CraneLister {
    async fn list_tags(&self, repository: &str) -> Result<Vec<String>, SourceError> {
        let child = Command::new("crane")
            .arg("ls")
            .arg(repository)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = match tokio::time::timeout(self.timeout, child).await {
            Ok(result) => result.map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SourceError::ToolUnavailable
                } else {
                    SourceError::listing_failed(repository, e.to_string())
                }
            })?,
            Err(_) => {
                return Err(SourceError::Timeout {
                    repository: repository.to_string(),
                    seconds: self.timeout.as_secs(),
                })
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(classify_failure(repository, &stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }
}

/// Map a non-zero crane exit onto the error taxonomy from its stderr text
fn classify_failure(repository: &str, stderr: &str) -> SourceError {
    let lowered = stderr.to_ascii_lowercase();
    if lowered.contains("not found") || stderr.contains("404") {
        return SourceError::repository_not_found(repository);
    }
    if lowered.contains("unauthorized") || stderr.contains("401") {
        return SourceError::unauthorized(repository);
    }
    SourceError::listing_failed(repository, stderr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let lister = CraneLister::new();
        assert_eq!(lister.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_custom_timeout() {
        let lister = CraneLister::with_timeout(Duration::from_secs(5));
        assert_eq!(lister.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_classify_failure_not_found() {
        let err = classify_failure("library/nope", "MANIFEST_UNKNOWN: repository not found");
        assert!(matches!(err, SourceError::RepositoryNotFound { .. }));
    }

    #[test]
    fn test_classify_failure_404_status() {
        let err = classify_failure("library/nope", "unexpected status code 404");
        assert!(matches!(err, SourceError::RepositoryNotFound { .. }));
    }

    #[test]
    fn test_classify_failure_unauthorized() {
        let err = classify_failure("private/repo", "UNAUTHORIZED: access denied");
        assert!(matches!(err, SourceError::Unauthorized { .. }));
    }

    #[test]
    fn test_classify_failure_401_status() {
        let err = classify_failure("private/repo", "unexpected status code 401");
        assert!(matches!(err, SourceError::Unauthorized { .. }));
    }

    #[test]
    fn test_classify_failure_other_carries_stderr() {
        let err = classify_failure("library/nginx", "connection reset by peer");
        match err {
            SourceError::ListingFailed { stderr, .. } => {
                assert_eq!(stderr, "connection reset by peer");
            }
            other => panic!("expected ListingFailed, got {:?}", other),
        }
    }
}
