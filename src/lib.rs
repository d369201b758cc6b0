//! relcheck - release version checker library
//!
//! This library provides the core functionality for checking whether a
//! newer release exists for a named artifact:
//! - Container image tags (listed via crane)
//! - Package versions on PyPI and the npm registry

pub mod check;
pub mod cli;
pub mod domain;
pub mod error;
pub mod report;
pub mod source;
pub mod version;
