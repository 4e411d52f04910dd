//! Integration tests for `modpath resolve --json` output.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn cargo_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO"));
    cmd.args(["run", "-q", "-p", "modpath-cli", "--bin", "modpath", "--"]);
    cmd.env_remove("NODE_ENV");
    cmd
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_resolve_root_json() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("src/utils/format.js"), "");
    write(&dir.path().join("src/app/index.js"), "");
    write(
        &dir.path().join("modpath.json"),
        r#"{ "root": ["./src"], "extensions": [".js"] }"#,
    );

    let output = cargo_bin()
        .arg("--json")
        .arg("--cwd")
        .arg(dir.path())
        .args([
            "resolve",
            "utils/format",
            "--file",
            "src/app/index.js",
            "--config",
            "modpath.json",
        ])
        .output()
        .expect("Failed to run resolve command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");

    assert_eq!(json["ok"], true);
    assert_eq!(json["specifier"], "utils/format");
    assert_eq!(json["resolved"], "../utils/format");
    assert_eq!(json["strategy"], "root");
    assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
}

#[test]
fn test_resolve_alias_warning_json() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("src/index.js"), "");
    write(
        &dir.path().join("modpath.json"),
        r#"{ "alias": { "underscore": "lodash" } }"#,
    );

    let output = cargo_bin()
        .arg("--json")
        .arg("--cwd")
        .arg(dir.path())
        .args([
            "resolve",
            "underscore",
            "--file",
            "src/index.js",
            "-c",
            "modpath.json",
        ])
        .output()
        .expect("Failed to run resolve command");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    assert_eq!(json["resolved"], "lodash");
    assert_eq!(json["strategy"], "alias");
    assert_eq!(json["mode"], "development");
    let warnings = json["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "unresolved_alias_target");
    assert_eq!(warnings[0]["specifier"], "lodash");
}

#[test]
fn test_resolve_production_has_no_warning() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("src/index.js"), "");
    write(
        &dir.path().join("modpath.json"),
        r#"{ "alias": { "underscore": "lodash" } }"#,
    );

    let output = cargo_bin()
        .arg("--json")
        .arg("--cwd")
        .arg(dir.path())
        .args([
            "resolve",
            "underscore",
            "--file",
            "src/index.js",
            "-c",
            "modpath.json",
            "--production",
        ])
        .output()
        .expect("Failed to run resolve command");

    let json: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(json["resolved"], "lodash");
    assert_eq!(json["mode"], "production");
    assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
}

#[test]
fn test_resolve_unresolved_exit_code() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("src/index.js"), "");

    let output = cargo_bin()
        .arg("--json")
        .arg("--cwd")
        .arg(dir.path())
        .args(["resolve", "nowhere/to/be/found", "--file", "src/index.js"])
        .output()
        .expect("Failed to run resolve command");

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(json["ok"], false);
    assert!(json["resolved"].is_null());
    assert!(json["strategy"].is_null());
}

#[test]
fn test_missing_config_fails() {
    let dir = tempdir().unwrap();

    let output = cargo_bin()
        .arg("--cwd")
        .arg(dir.path())
        .args(["resolve", "x", "--file", "a.js", "-c", "missing.json"])
        .output()
        .expect("Failed to run resolve command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.json"));
}

#[test]
fn test_version() {
    let output = cargo_bin()
        .arg("version")
        .output()
        .expect("Failed to run version command");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("modpath "));
}
