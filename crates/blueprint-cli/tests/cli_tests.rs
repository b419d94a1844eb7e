//! Integration tests for the `blueprint` binary.

use std::fs::File;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn blueprint() -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("blueprint");
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env("BLUEPRINT__OUTPUT__FORMAT", "plain");
    cmd
}

#[test]
fn help_lists_subcommands() {
    blueprint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("targets"))
        .stdout(predicate::str::contains("artifacts"));
}

#[test]
fn version_flag() {
    blueprint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_generates_project_and_archive() {
    let temp = TempDir::new().unwrap();
    blueprint()
        .current_dir(temp.path())
        .args(["new", "order-service", "-g", "com.acme", "-D", "web", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'order-service' created"));

    let root = temp.path().join("order-service");
    assert!(root.join("pom.xml").is_file());
    assert!(
        root.join("src/main/java/com/acme/orderservice/OrderServiceApplication.java")
            .is_file()
    );
    let archive = temp.path().join("order-service.zip");
    assert!(zip::ZipArchive::new(File::open(archive).unwrap()).is_ok());
}

#[test]
fn output_flag_selects_target_directory() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("projects");
    blueprint()
        .args(["new", "demo-app", "--yes", "-o"])
        .arg(&out)
        .assert()
        .success();
    assert!(out.join("demo-app/README.md").is_file());
    assert!(out.join("demo-app.zip").is_file());
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    blueprint()
        .current_dir(temp.path())
        .args(["new", "demo-app", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pom.xml"))
        .stdout(predicate::str::contains("src/main/java/"));
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn dry_run_json_lists_files() {
    let temp = TempDir::new().unwrap();
    let assert = blueprint()
        .current_dir(temp.path())
        .args(["new", "demo-app", "--dry-run", "--output-format", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let files = report["files"].as_array().unwrap();
    assert_eq!(files[0]["path"], "pom.xml");
    assert_eq!(files[0]["kind"], "text");
}

#[test]
fn invalid_artifact_id_exits_with_user_error() {
    let temp = TempDir::new().unwrap();
    blueprint()
        .current_dir(temp.path())
        .args(["new", "ab", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error code:"));
}

#[test]
fn incompatible_platform_exits_with_user_error() {
    let temp = TempDir::new().unwrap();
    blueprint()
        .current_dir(temp.path())
        .args(["new", "demo-app", "--java", "25", "--boot", "3.4", "--yes"])
        .assert()
        .code(2);
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn existing_project_exits_with_user_error() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("demo-app")).unwrap();
    blueprint()
        .current_dir(temp.path())
        .args(["new", "demo-app", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn missing_local_templates_exit_with_not_found() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    std::fs::create_dir(&templates).unwrap();
    blueprint()
        .current_dir(temp.path())
        .env("BLUEPRINT__TEMPLATES__LOCAL_PATH", &templates)
        .args(["new", "demo-app", "--enforcement", "basic", "--yes"])
        .assert()
        .failure();
}

#[test]
fn targets_lists_three_pairs() {
    blueprint()
        .arg("targets")
        .assert()
        .success()
        .stdout(predicate::str::contains("3.4.5"))
        .stdout(predicate::str::contains("3.5.3"));
}

#[test]
fn targets_json() {
    let assert = blueprint()
        .args(["targets", "--output-format", "json"])
        .assert()
        .success();
    let rows: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(3));
}

#[test]
fn artifacts_in_profile_order() {
    let assert = blueprint().arg("artifacts").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let build = stdout.find("build-config").unwrap();
    let docs = stdout.find("project-documentation").unwrap();
    assert!(build < docs);
}

#[test]
fn env_overrides_default_group() {
    blueprint()
        .env("BLUEPRINT__DEFAULTS__GROUP_ID", "org.acme")
        .args(["config", "get", "defaults.group_id"])
        .assert()
        .success()
        .stdout(predicate::str::diff("org.acme\n"));
}

#[test]
fn config_file_flag_is_honoured() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    std::fs::write(&path, "[defaults]\nlayout = \"hexagonal\"\n").unwrap();
    blueprint()
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "defaults.layout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hexagonal"));
}

#[test]
fn missing_config_file_exits_with_configuration_error() {
    let temp = TempDir::new().unwrap();
    blueprint()
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .arg("targets")
        .assert()
        .code(4);
}

#[test]
fn unknown_config_key_is_user_error() {
    blueprint()
        .args(["config", "get", "nope.nothing"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn init_local_writes_config() {
    let temp = TempDir::new().unwrap();
    blueprint()
        .current_dir(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();
    let text = std::fs::read_to_string(temp.path().join(".blueprint.toml")).unwrap();
    assert!(text.contains("[defaults]"));
}

#[test]
fn completions_for_bash() {
    blueprint()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("blueprint"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    blueprint().arg("frobnicate").assert().code(2);
}

#[test]
fn new_reports_the_normalized_artifact_id() {
    let temp = TempDir::new().unwrap();
    blueprint()
        .current_dir(temp.path())
        .args(["new", "Acme_App", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'acme-app' created"));
    assert!(temp.path().join("acme-app/pom.xml").is_file());
    assert!(temp.path().join("acme-app.zip").is_file());
}
