//! Check reports and exit status selection
//!
//! One structured report per invocation, pretty-printed to stdout with
//! camelCase fields. Success and error reports share the identity fields;
//! only the error shape carries `error`, and only the success shape carries
//! `latestTag`/`latestVersion` and `hasNewerVersion`. Identity fields the
//! locator could not produce are emitted as null.

use crate::domain::{ImageRef, RegistryFamily};
use crate::source::PackageIndex;
use serde::Serialize;
use std::process::ExitCode;

/// Report for a container image check
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReport {
    /// The reference exactly as given on the command line
    pub image: String,
    /// Cosmetic registry family classification
    pub registry: Option<RegistryFamily>,
    /// Repository coordinate handed to the tag lister
    pub repository: Option<String>,
    /// The tag currently in use
    pub current_tag: Option<String>,
    /// The newest release tag found in the registry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_tag: Option<String>,
    /// Whether the latest tag is newer than the current one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_newer_version: Option<bool>,
    /// Failure cause; present only on error reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ImageReport {
    /// Build a success report
    pub fn success(image: &str, image_ref: &ImageRef, latest_tag: String, has_newer: bool) -> Self {
        Self {
            image: image.to_string(),
            registry: Some(image_ref.registry),
            repository: Some(image_ref.repository.clone()),
            current_tag: Some(image_ref.current_tag.clone()),
            latest_tag: Some(latest_tag),
            has_newer_version: Some(has_newer),
            error: None,
        }
    }

    /// Build an error report, with best-effort identity fields
    pub fn failure(image: &str, image_ref: Option<&ImageRef>, error: String) -> Self {
        Self {
            image: image.to_string(),
            registry: image_ref.map(|r| r.registry),
            repository: image_ref.map(|r| r.repository.clone()),
            current_tag: image_ref.map(|r| r.current_tag.clone()),
            latest_tag: None,
            has_newer_version: None,
            error: Some(error),
        }
    }
}

/// Report for a package index check
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageReport {
    /// Package name as given on the command line
    pub package: String,
    /// Which index was queried
    pub index: PackageIndex,
    /// The version currently in use
    pub current_version: String,
    /// The index's declared latest version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,
    /// Whether the latest version is newer than the current one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_newer_version: Option<bool>,
    /// Failure cause; present only on error reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PackageReport {
    /// Build a success report
    pub fn success(
        index: PackageIndex,
        package: &str,
        current_version: &str,
        latest_version: String,
        has_newer: bool,
    ) -> Self {
        Self {
            package: package.to_string(),
            index,
            current_version: current_version.to_string(),
            latest_version: Some(latest_version),
            has_newer_version: Some(has_newer),
            error: None,
        }
    }

    /// Build an error report
    pub fn failure(
        index: PackageIndex,
        package: &str,
        current_version: &str,
        error: String,
    ) -> Self {
        Self {
            package: package.to_string(),
            index,
            current_version: current_version.to_string(),
            latest_version: None,
            has_newer_version: None,
            error: Some(error),
        }
    }
}

/// The single report emitted by one invocation
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CheckReport {
    /// Container image check
    Image(ImageReport),
    /// Package index check
    Package(PackageReport),
}

impl CheckReport {
    /// Whether a newer version was found
    pub fn has_newer_version(&self) -> bool {
        match self {
            CheckReport::Image(r) => r.has_newer_version.unwrap_or(false),
            CheckReport::Package(r) => r.has_newer_version.unwrap_or(false),
        }
    }

    /// Whether this is an error report
    pub fn is_error(&self) -> bool {
        match self {
            CheckReport::Image(r) => r.error.is_some(),
            CheckReport::Package(r) => r.error.is_some(),
        }
    }

    /// Process exit status: 0 signals a newer version, 1 everything else
    ///
    /// Errors and up-to-date share exit 1; they are distinguished by the
    /// presence of the `error` field in the report.
    pub fn exit_status(&self) -> ExitCode {
        if self.has_newer_version() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }

    /// Render the report as indented JSON
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
