/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Copy the sample measures and issues payloads into `dir`.
fn create_test_report(dir: &Path) {
    for file in ["measure.json", "issues.json"] {
        fs::copy(Path::new("tests/fixtures/sample-report").join(file), dir.join(file)).unwrap();
    }
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

// ============================================================================
// Auto-discovery
// ============================================================================

#[test]
fn test_config_auto_discovered_in_input_dir() {
    let temp_dir = TempDir::new().unwrap();
    create_test_report(temp_dir.path());
    write_config(
        &temp_dir.path().join("dep-explorer.config.yml"),
        "format: markdown\nmode: unused\n",
    );

    cargo_bin_cmd!("dep-explorer")
        .arg("-i")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("# Dependency Explorer"))
        .stdout(predicate::str::contains("- Mode: `unused`"))
        .stdout(predicate::str::contains("org.slf4j:slf4j-api"))
        .stdout(predicate::str::contains("| AY-3 | unused |"));
}

#[test]
fn test_no_config_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    create_test_report(temp_dir.path());

    cargo_bin_cmd!("dep-explorer")
        .arg("-i")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependency explorer - mode: all"));
}

// ============================================================================
// Explicit --config path
// ============================================================================

#[test]
fn test_explicit_config_path() {
    let temp_dir = TempDir::new().unwrap();
    create_test_report(temp_dir.path());
    let config_path = temp_dir.path().join("custom.yml");
    write_config(
        &config_path,
        "format: json\nmodules:\n  - acme:lib\n",
    );

    let output = cargo_bin_cmd!("dep-explorer")
        .arg("-i")
        .arg(temp_dir.path())
        .arg("-c")
        .arg(&config_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let modules = json["modules"].as_array().unwrap();
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0]["name"], "acme:lib");
}

#[test]
fn test_explicit_config_missing_file_is_application_error() {
    let temp_dir = TempDir::new().unwrap();
    create_test_report(temp_dir.path());

    cargo_bin_cmd!("dep-explorer")
        .arg("-i")
        .arg(temp_dir.path())
        .arg("-c")
        .arg(temp_dir.path().join("missing.yml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

// ============================================================================
// CLI precedence
// ============================================================================

#[test]
fn test_cli_mode_overrides_config_mode() {
    let temp_dir = TempDir::new().unwrap();
    create_test_report(temp_dir.path());
    write_config(
        &temp_dir.path().join("dep-explorer.config.yml"),
        "mode: unused\nsearch: slf4j\n",
    );

    cargo_bin_cmd!("dep-explorer")
        .arg("-i")
        .arg(temp_dir.path())
        .args(["--mode", "mismatch", "--search", "annotations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode: mismatch, search: \"annotations\""))
        .stdout(predicate::str::contains("com.fasterxml:annotations 2.15.0 [mismatch]"))
        .stdout(predicate::str::contains("slf4j").not());
}

#[test]
fn test_config_fail_on_findings() {
    let temp_dir = TempDir::new().unwrap();
    create_test_report(temp_dir.path());
    write_config(
        &temp_dir.path().join("dep-explorer.config.yml"),
        "mode: update\nfail_on_findings: true\n",
    );

    cargo_bin_cmd!("dep-explorer")
        .arg("-i")
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("1 issue(s) listed for mode 'update'"));
}

// ============================================================================
// Validation and warnings
// ============================================================================

#[test]
fn test_invalid_config_mode_is_application_error() {
    let temp_dir = TempDir::new().unwrap();
    create_test_report(temp_dir.path());
    write_config(
        &temp_dir.path().join("dep-explorer.config.yml"),
        "mode: everything\n",
    );

    cargo_bin_cmd!("dep-explorer")
        .arg("-i")
        .arg(temp_dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid mode"));
}

#[test]
fn test_unknown_config_field_warns() {
    let temp_dir = TempDir::new().unwrap();
    create_test_report(temp_dir.path());
    write_config(
        &temp_dir.path().join("dep-explorer.config.yml"),
        "format: text\nexclude_packages:\n  - pip\n",
    );

    cargo_bin_cmd!("dep-explorer")
        .arg("-i")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Unknown config field 'exclude_packages' will be ignored",
        ));
}
