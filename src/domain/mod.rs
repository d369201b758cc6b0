//! Core domain models for relcheck
//!
//! This module contains the fundamental types used throughout the application:
//! - Artifact references (image and package coordinates)
//! - Registry family classification
//! - Normalized version values and their dialect-aware ordering

mod reference;
mod version;

pub use reference::{parse_image_reference, ImageRef, PackageRef, RegistryFamily};
pub use version::{Dialect, DottedVersion, NormalizedVersion, VersionCandidate};
