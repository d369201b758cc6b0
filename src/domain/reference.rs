//! Artifact reference types and the image-reference locator
//!
//! Splits a raw identifier into its repository coordinate and the current
//! version being checked, and classifies the registry family for container
//! references. The family is a cosmetic label carried into the report; it
//! never changes how tags are listed.

use crate::error::ReferenceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Registry family of a container image reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryFamily {
    /// Docker Hub (explicit docker.io/ prefix or no registry host)
    Dockerhub,
    /// GitHub Container Registry (ghcr.io/ prefix)
    Ghcr,
    /// Any other registry host
    Custom,
}

impl RegistryFamily {
    /// Returns the display name for this registry family
    pub fn display_name(&self) -> &'static str {
        match self {
            RegistryFamily::Dockerhub => "dockerhub",
            RegistryFamily::Ghcr => "ghcr",
            RegistryFamily::Custom => "custom",
        }
    }
}

impl fmt::Display for RegistryFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A parsed container image reference
///
/// Invariant: repository and current_tag are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Registry family classification
    pub registry: RegistryFamily,
    /// Repository coordinate as passed to the tag lister
    pub repository: String,
    /// The tag currently in use
    pub current_tag: String,
}

/// A package identified on an index, with the version currently in use
///
/// Invariant: package and current_version are non-empty (enforced by clap
/// requiring both positionals).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRef {
    /// Package name as known to the index
    pub package: String,
    /// The version currently in use
    pub current_version: String,
}

/// Parse a container image reference into an [`ImageRef`]
///
/// The tag is split off at the last colon. A reference without a tag, with an
/// empty name or tag, or where the "tag" contains a slash (a registry port,
/// not a tag) is rejected as malformed.
///
/// Classification priority: explicit `ghcr.io/` prefix, explicit `docker.io/`
/// prefix, a dotted first path segment (a registry host), otherwise Docker
/// Hub. Official images without a namespace get the implicit `library/`
/// prefix.
pub fn parse_image_reference(reference: &str) -> Result<ImageRef, ReferenceError> {
    let Some((image_part, current_tag)) = reference.rsplit_once(':') else {
        return Err(ReferenceError::malformed(reference));
    };

    if image_part.is_empty() || current_tag.is_empty() || current_tag.contains('/') {
        return Err(ReferenceError::malformed(reference));
    }

    let (registry, repository) = if image_part.starts_with("ghcr.io/") {
        (RegistryFamily::Ghcr, image_part.to_string())
    } else if image_part.starts_with("docker.io/") {
        (RegistryFamily::Dockerhub, image_part.to_string())
    } else if first_segment_is_host(image_part) {
        (RegistryFamily::Custom, image_part.to_string())
    } else if image_part.contains('/') {
        (RegistryFamily::Dockerhub, image_part.to_string())
    } else {
        // Official image, add the implicit namespace
        (RegistryFamily::Dockerhub, format!("library/{}", image_part))
    };

    Ok(ImageRef {
        registry,
        repository,
        current_tag: current_tag.to_string(),
    })
}

/// True when the first path segment looks like a registry hostname
fn first_segment_is_host(image_part: &str) -> bool {
    match image_part.split_once('/') {
        Some((first, _)) => first.contains('.'),
        None => false,
    }
}
