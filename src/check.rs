//! Check pipeline orchestration
//!
//! Wires the locator, source adapters, and the version core together, and
//! folds every failure into the report shape at this boundary. Nothing past
//! this point propagates as a raw error.

use crate::domain::{parse_image_reference, ImageRef, PackageRef};
use crate::error::{CheckError, VersionError};
use crate::report::{CheckReport, ImageReport, PackageReport};
use crate::source::{LatestFetcher, PackageIndex, TagLister};
use crate::version::{compare, select_latest};
use std::cmp::Ordering;

/// Check a container image reference against its registry
pub async fn check_image(lister: &dyn TagLister, reference: &str) -> CheckReport {
    let image_ref = match parse_image_reference(reference) {
        Ok(parsed) => parsed,
        Err(e) => return CheckReport::Image(ImageReport::failure(reference, None, e.to_string())),
    };

    match run_image_check(lister, &image_ref).await {
        Ok((latest_tag, has_newer)) => CheckReport::Image(ImageReport::success(
            reference, &image_ref, latest_tag, has_newer,
        )),
        Err(e) => {
            CheckReport::Image(ImageReport::failure(reference, Some(&image_ref), e.to_string()))
        }
    }
}

/// List, classify, select, and compare for the container path
async fn run_image_check(
    lister: &dyn TagLister,
    image_ref: &ImageRef,
) -> Result<(String, bool), CheckError> {
    let tags = lister.list_tags(&image_ref.repository).await?;
    if tags.is_empty() {
        return Err(VersionError::no_tags(&image_ref.repository).into());
    }

    let latest = select_latest(&tags)?;
    let ordering = compare(&latest.tag, &image_ref.current_tag)?;

    Ok((latest.tag, ordering == Ordering::Greater))
}

/// Check a package version against a package index
pub async fn check_package(
    fetcher: &dyn LatestFetcher,
    index: PackageIndex,
    package_ref: &PackageRef,
) -> CheckReport {
    match run_package_check(fetcher, index, package_ref).await {
        Ok((latest_version, has_newer)) => CheckReport::Package(PackageReport::success(
            index,
            &package_ref.package,
            &package_ref.current_version,
            latest_version,
            has_newer,
        )),
        Err(e) => CheckReport::Package(PackageReport::failure(
            index,
            &package_ref.package,
            &package_ref.current_version,
            e.to_string(),
        )),
    }
}

/// Fetch the authoritative latest version and compare for the package path
///
/// The index value still passes through the normalizer inside [`compare`],
/// keeping its dialect consistent with the container path.
async fn run_package_check(
    fetcher: &dyn LatestFetcher,
    index: PackageIndex,
    package_ref: &PackageRef,
) -> Result<(String, bool), CheckError> {
    let latest_version = fetcher.fetch_latest(index, &package_ref.package).await?;
    let ordering = compare(&latest_version, &package_ref.current_version)?;

    Ok((latest_version, ordering == Ordering::Greater))
}
