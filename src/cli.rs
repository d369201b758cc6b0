//! CLI argument parsing module for relcheck

use crate::source::DEFAULT_TIMEOUT_SECS;
use clap::{Parser, Subcommand};

/// Release version checker
#[derive(Parser, Debug, Clone)]
#[command(
    name = "relcheck",
    version,
    about = "Check whether a newer release exists for an image tag or package version"
)]
pub struct CliArgs {
    /// Print resolution diagnostics on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// The artifact kind to check
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check a container image tag against its registry (requires crane)
    Image {
        /// Image reference including tag (e.g. nginx:1.21, ghcr.io/owner/repo:v1.0.0)
        reference: String,

        /// Timeout in seconds for the tag listing
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout: u64,
    },

    /// Check a package version against PyPI
    Pypi {
        /// Package name (e.g. requests)
        package: String,

        /// Version currently in use (e.g. 2.28.0)
        current_version: String,
    },

    /// Check a package version against the npm registry
    Npm {
        /// Package name (e.g. lodash)
        package: String,

        /// Version currently in use (e.g. 4.17.21)
        current_version: String,
    },
}
