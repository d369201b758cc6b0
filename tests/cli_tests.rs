//! End-to-end CLI tests for relcheck
//!
//! These tests exercise argument handling, the error-report contract, and
//! exit codes. Only offline paths are covered: nothing here reaches a
//! registry or package index.

use assert_cmd::Command;
use predicates::prelude::*;

fn relcheck() -> Command {
    Command::cargo_bin("relcheck").expect("binary should build")
}

mod usage {
    use super::*;

    #[test]
    fn test_no_arguments_prints_usage_and_exits_1() {
        relcheck()
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn test_image_without_reference_exits_1() {
        relcheck()
            .arg("image")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn test_pypi_without_current_version_exits_1() {
        relcheck()
            .args(["pypi", "requests"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn test_help_exits_0() {
        relcheck()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("image"))
            .stdout(predicate::str::contains("pypi"))
            .stdout(predicate::str::contains("npm"));
    }

    #[test]
    fn test_version_exits_0() {
        relcheck()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("relcheck"));
    }

    #[test]
    fn test_unknown_subcommand_exits_1() {
        relcheck().arg("cargo").assert().code(1);
    }
}

mod error_reports {
    use super::*;

    #[test]
    fn test_malformed_reference_emits_error_report() {
        relcheck()
            .args(["image", "nginx"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("\"image\": \"nginx\""))
            .stdout(predicate::str::contains("\"repository\": null"))
            .stdout(predicate::str::contains("\"currentTag\": null"))
            .stdout(predicate::str::contains("must include a tag"))
            .stdout(predicate::str::contains("\"error\""));
    }

    #[test]
    fn test_malformed_reference_with_port_but_no_tag() {
        relcheck()
            .args(["image", "registry.example.com:5000/team/app"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("\"error\""));
    }

    #[test]
    fn test_error_report_has_no_has_newer_version_field() {
        relcheck()
            .args(["image", "nginx"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("hasNewerVersion").not());
    }

    #[test]
    fn test_report_is_valid_json() {
        let output = relcheck().args(["image", "nginx"]).output().unwrap();
        let stdout = String::from_utf8(output.stdout).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&stdout).expect("stdout should be one JSON document");
        assert_eq!(parsed["image"], "nginx");
        assert!(parsed["repository"].is_null());
        assert!(parsed["error"].is_string());
    }
}
