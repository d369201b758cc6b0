//! relcheck - release version checker CLI
//!
//! Single-shot check for a newer release of a container image tag or a
//! package index version. Emits one JSON report on stdout; exit 0 signals a
//! newer version was found, exit 1 anything else.

use clap::Parser;
use relcheck::check::{check_image, check_package};
use relcheck::cli::{CliArgs, Command};
use relcheck::domain::PackageRef;
use relcheck::report::CheckReport;
use relcheck::source::{CraneLister, IndexClient, PackageIndex};
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

#[tokio::main]
async fn main() -> ExitCode {
    // Usage errors exit 1 with help text on stderr; --help/--version keep
    // clap's stdout behavior and exit 0.
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            return code;
        }
    };

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("relcheck v{}", env!("CARGO_PKG_VERSION"));
    }

    let report = match &args.command {
        Command::Image { reference, timeout } => {
            if args.verbose {
                eprintln!("Listing tags for {} ({}s timeout)", reference, timeout);
            }
            let lister = CraneLister::with_timeout(Duration::from_secs(*timeout));
            check_image(&lister, reference).await
        }
        Command::Pypi {
            package,
            current_version,
        } => run_package(args.verbose, PackageIndex::Pypi, package, current_version).await,
        Command::Npm {
            package,
            current_version,
        } => run_package(args.verbose, PackageIndex::Npm, package, current_version).await,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", report.to_pretty_json()?)?;
    stdout.flush()?;

    Ok(report.exit_status())
}

/// Run a package check against one index
async fn run_package(
    verbose: bool,
    index: PackageIndex,
    package: &str,
    current_version: &str,
) -> CheckReport {
    if verbose {
        eprintln!("Fetching latest version of {} from {}", package, index);
    }
    let package_ref = PackageRef {
        package: package.to_string(),
        current_version: current_version.to_string(),
    };
    let client = IndexClient::new();
    check_package(&client, index, &package_ref).await
}
