//! Package index metadata fetch
//!
//! One GET against the index's per-package metadata document, extracting its
//! single declared latest version:
//! - PyPI: https://pypi.org/pypi/{package}/json, field `info.version`
//! - npm:  https://registry.npmjs.org/{package}, field `dist-tags.latest`
//!
//! The index is authoritative for "latest", so no classification or
//! candidate selection happens on this path. No retries; a single failure
//! is terminal for the invocation.

use crate::error::SourceError;
use crate::source::LatestFetcher;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// PyPI API base URL
const PYPI_API_URL: &str = "https://pypi.org/pypi";

/// npm registry base URL
const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// User-Agent header sent with index requests
const USER_AGENT: &str = concat!("relcheck/", env!("CARGO_PKG_VERSION"));

/// Supported package indexes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageIndex {
    /// Python Package Index
    Pypi,
    /// npm registry
    Npm,
}

impl PackageIndex {
    /// Returns the display name for this index
    pub fn display_name(&self) -> &'static str {
        match self {
            PackageIndex::Pypi => "PyPI",
            PackageIndex::Npm => "npm",
        }
    }

    /// Build the metadata URL for a package
    fn metadata_url(&self, package: &str) -> String {
        match self {
            PackageIndex::Pypi => format!("{}/{}/json", PYPI_API_URL, package),
            PackageIndex::Npm => format!("{}/{}", NPM_REGISTRY_URL, package),
        }
    }
}

impl fmt::Display for PackageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// PyPI package metadata response
#[derive(Debug, Deserialize)]
struct PyPiResponse {
    info: PyPiInfo,
}

/// PyPI info block holding the current published version
#[derive(Debug, Deserialize)]
struct PyPiInfo {
    version: String,
}

/// npm package metadata response
#[derive(Debug, Deserialize)]
struct NpmResponse {
    #[serde(rename = "dist-tags")]
    dist_tags: NpmDistTags,
}

/// npm dist-tags block
#[derive(Debug, Deserialize)]
struct NpmDistTags {
    latest: String,
}

/// HTTP client for package index metadata
///
/// The underlying client is built per request, so a construction failure
/// carries the package and index being checked instead of a blank identity.
#[derive(Debug, Default)]
pub struct IndexClient;

impl IndexClient {
    /// Create a new index client
    pub fn new() -> Self {
        Self
    }

    /// Build the transport for one fetch
    ///
    /// No explicit request timeout is set; the transport default applies.
    fn build_client(package: &str, index: PackageIndex) -> Result<Client, SourceError> {
        Client::builder().user_agent(USER_AGENT).build().map_err(|e| {
            SourceError::fetch(
                package,
                index.display_name(),
                format!("failed to build client: {}", e),
            )
        })
    }
}

#[async_trait]
impl LatestFetcher for IndexClient {
    async fn fetch_latest(
        &self,
        index: PackageIndex,
        package: &str,
    ) -> Result<String, SourceError> {
        let client = Self::build_client(package, index)?;
        let url = index.metadata_url(package);
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::fetch(package, index.display_name(), e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::package_not_found(package, index.display_name()));
        }
        if !status.is_success() {
            return Err(SourceError::IndexHttp {
                package: package.to_string(),
                index: index.display_name().to_string(),
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let invalid =
            |e: reqwest::Error| SourceError::invalid_response(package, index.display_name(), e.to_string());

        match index {
            PackageIndex::Pypi => {
                let body: PyPiResponse = response.json().await.map_err(invalid)?;
                Ok(body.info.version)
            }
            PackageIndex::Npm => {
                let body: NpmResponse = response.json().await.map_err(invalid)?;
                Ok(body.dist_tags.latest)
            }
        }
    }
}
