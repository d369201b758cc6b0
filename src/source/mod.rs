//! Source adapters for the two artifact kinds
//!
//! This module provides:
//! - TagLister trait and the crane-backed container tag lister
//! - LatestFetcher trait and the HTTP package index client (PyPI, npm)

mod crane;
mod index;

pub use crane::{CraneLister, DEFAULT_TIMEOUT_SECS};
pub use index::{IndexClient, PackageIndex};

use crate::error::SourceError;
use async_trait::async_trait;

/// Trait for listing the tags published for a container repository
#[async_trait]
pub trait TagLister: Send + Sync {
    /// Return every tag currently published for the repository
    ///
    /// The registry's order is preserved but carries no meaning. An empty
    /// vec is a valid outcome handled by the caller.
    async fn list_tags(&self, repository: &str) -> Result<Vec<String>, SourceError>;
}

/// Trait for fetching the single declared latest version from a package index
#[async_trait]
pub trait LatestFetcher: Send + Sync {
    /// Return the index's authoritative latest version for the package
    async fn fetch_latest(
        &self,
        index: PackageIndex,
        package: &str,
    ) -> Result<String, SourceError>;
}
