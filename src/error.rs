//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ReferenceError: Malformed artifact identifiers
//! - SourceError: Failures while listing tags or fetching index metadata
//! - VersionError: Failures in classification, normalization, or comparison

use thiserror::Error;

/// Application-level error type
///
/// Every failure of a single check invocation folds into this type at the
/// pipeline boundary and is rendered as an error report, never a crash.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Artifact identifier parsing errors
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    /// Source adapter errors (crane subprocess, index HTTP)
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Version classification/normalization/comparison errors
    #[error(transparent)]
    Version(#[from] VersionError),
}

/// Errors related to parsing artifact identifiers
#[derive(Error, Debug)]
pub enum ReferenceError {
    /// Image reference has no tag delimiter (or an empty name/tag)
    #[error("image reference '{reference}' must include a tag (e.g., nginx:1.21)")]
    Malformed { reference: String },
}

/// Errors related to source adapters
#[derive(Error, Debug)]
pub enum SourceError {
    /// Registry reported the repository as missing
    #[error("repository '{repository}' not found")]
    RepositoryNotFound { repository: String },

    /// Registry rejected the listing for lack of authorization
    #[error("unauthorized access to repository '{repository}'")]
    Unauthorized { repository: String },

    /// The crane binary is not installed or not on PATH
    #[error("crane command not found; install crane (go-containerregistry)")]
    ToolUnavailable,

    /// Tag listing exceeded the configured bound
    #[error("crane ls timed out after {seconds}s for '{repository}'")]
    Timeout { repository: String, seconds: u64 },

    /// Tag listing failed for any other reason, carrying raw diagnostics
    #[error("crane ls failed for '{repository}': {stderr}")]
    ListingFailed { repository: String, stderr: String },

    /// Package index reported the package as missing
    #[error("package '{package}' not found on {index}")]
    PackageNotFound { package: String, index: String },

    /// Package index returned an unsuccessful HTTP status
    #[error("HTTP {status} {reason} from {index} for '{package}'")]
    IndexHttp {
        package: String,
        index: String,
        status: u16,
        reason: String,
    },

    /// Transport-level failure talking to the package index
    #[error("failed to fetch '{package}' from {index}: {message}")]
    Fetch {
        package: String,
        index: String,
        message: String,
    },

    /// Index response could not be decoded or lacks the latest-version field
    #[error("invalid response from {index} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        index: String,
        message: String,
    },
}

/// Errors related to version handling
#[derive(Error, Debug)]
pub enum VersionError {
    /// Repository published no tags at all
    #[error("no tags found in repository '{repository}'")]
    NoTags { repository: String },

    /// No tag survived classification and normalization
    #[error("no version tags found in repository")]
    NoVersionTags,

    /// A value handed to the comparator could not be normalized
    #[error("unable to normalize version '{value}' for comparison")]
    Unnormalizable { value: String },

    /// A calendar-date version was compared against a numeric one
    #[error("cannot compare date version '{date}' against numeric version '{numeric}'")]
    DialectMismatch { date: String, numeric: String },
}

impl ReferenceError {
    /// Creates a new Malformed error
    pub fn malformed(reference: impl Into<String>) -> Self {
        ReferenceError::Malformed {
            reference: reference.into(),
        }
    }
}

impl SourceError {
    /// Creates a new RepositoryNotFound error
    pub fn repository_not_found(repository: impl Into<String>) -> Self {
        SourceError::RepositoryNotFound {
            repository: repository.into(),
        }
    }

    /// Creates a new Unauthorized error
    pub fn unauthorized(repository: impl Into<String>) -> Self {
        SourceError::Unauthorized {
            repository: repository.into(),
        }
    }

    /// Creates a new ListingFailed error
    pub fn listing_failed(repository: impl Into<String>, stderr: impl Into<String>) -> Self {
        SourceError::ListingFailed {
            repository: repository.into(),
            stderr: stderr.into(),
        }
    }

    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, index: impl Into<String>) -> Self {
        SourceError::PackageNotFound {
            package: package.into(),
            index: index.into(),
        }
    }

    /// Creates a new Fetch error
    pub fn fetch(
        package: impl Into<String>,
        index: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        SourceError::Fetch {
            package: package.into(),
            index: index.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        index: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        SourceError::InvalidResponse {
            package: package.into(),
            index: index.into(),
            message: message.into(),
        }
    }
}

impl VersionError {
    /// Creates a new NoTags error
    pub fn no_tags(repository: impl Into<String>) -> Self {
        VersionError::NoTags {
            repository: repository.into(),
        }
    }

    /// Creates a new Unnormalizable error
    pub fn unnormalizable(value: impl Into<String>) -> Self {
        VersionError::Unnormalizable {
            value: value.into(),
        }
    }

    /// Creates a new DialectMismatch error
    pub fn dialect_mismatch(date: impl Into<String>, numeric: impl Into<String>) -> Self {
        VersionError::DialectMismatch {
            date: date.into(),
            numeric: numeric.into(),
        }
    }
}
