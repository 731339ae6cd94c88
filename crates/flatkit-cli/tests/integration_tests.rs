//! Integration tests for the flatkit CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[allow(deprecated)]
fn cli() -> Command {
    Command::cargo_bin("flatkit").unwrap()
}

/// Project directory with a JSONC options file and a gitignore
fn create_test_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    let options = r#"{
  // comments and trailing commas are allowed
  "options": {
    "typescript": { "overrides": { "@typescript-eslint/no-explicit-any": "error" } },
    "svelte": true,
    "unicorn": false,
  },
  "configs": [
    { "name": "project/overrides", "files": ["src/**/*.ts"], "rules": { "no-console": "off" } },
  ],
}
"#;
    fs::write(temp_dir.path().join(".flatkitrc.json"), options).unwrap();
    fs::write(temp_dir.path().join(".gitignore"), "target\n/generated\n").unwrap();

    temp_dir
}

fn print_json(dir: &TempDir, extra: &[&str]) -> Vec<serde_json::Value> {
    let output = cli()
        .arg("print")
        .arg("--cwd")
        .arg(dir.path())
        .args(extra)
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_help_command() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("print"))
        .stdout(predicate::str::contains("schema"));
}

#[test]
fn test_version_command() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(VERSION));
}

#[test]
fn test_names_command() {
    let project = create_test_project();

    cli()
        .arg("names")
        .arg("--cwd")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("flatkit/ignores\nflatkit/gitignore\n"))
        .stdout(predicate::str::contains("flatkit/svelte/rules"))
        .stdout(predicate::str::contains("flatkit/typescript/rules"))
        .stdout(predicate::str::contains("flatkit/unicorn/rules").not())
        .stdout(predicate::str::ends_with("project/overrides\n"));
}

#[test]
fn test_print_json() {
    let project = create_test_project();
    let configs = print_json(&project, &[]);

    assert_eq!(configs[1]["name"], "flatkit/gitignore");
    assert_eq!(configs[1]["ignores"], serde_json::json!(["**/target", "generated"]));

    let last = configs.last().unwrap();
    assert_eq!(last["name"], "project/overrides");
    assert_eq!(last["rules"]["no-console"], "off");

    let typescript = configs
        .iter()
        .find(|c| c["name"] == "flatkit/typescript/rules")
        .unwrap();
    assert_eq!(typescript["rules"]["ts/no-explicit-any"], "error");
}

#[test]
fn test_print_without_rename() {
    let project = create_test_project();
    let configs = print_json(&project, &["--no-rename"]);

    let typescript = configs
        .iter()
        .find(|c| c["name"] == "flatkit/typescript/rules")
        .unwrap();
    assert_eq!(
        typescript["rules"]["@typescript-eslint/no-explicit-any"],
        "error"
    );
}

#[test]
fn test_print_yaml() {
    let project = create_test_project();

    cli()
        .args(["print", "--format", "yaml", "--cwd"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("name: flatkit/ignores"));
}

#[test]
fn test_explicit_config_file() {
    let project = TempDir::new().unwrap();
    let config = project.path().join("custom.yaml");
    fs::write(&config, "options:\n  gitignore: false\n  jsonc: false\n").unwrap();

    cli()
        .arg("--config")
        .arg(&config)
        .arg("names")
        .arg("--cwd")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("flatkit/gitignore").not())
        .stdout(predicate::str::contains("flatkit/jsonc").not())
        .stdout(predicate::str::contains("flatkit/disables/scripts"));
}

#[test]
fn test_files_key_is_rejected() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("flatkit.json"),
        r#"{ "options": { "files": ["**/*.ts"] } }"#,
    )
    .unwrap();

    cli()
        .arg("print")
        .arg("--cwd")
        .arg(project.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_strict_gitignore_missing_fails() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join(".flatkitrc.toml"),
        "[options.gitignore]\nroot = true\n",
    )
    .unwrap();

    cli()
        .arg("names")
        .arg("--cwd")
        .arg(project.path())
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_missing_config_file_fails() {
    cli()
        .args(["--config", "/nonexistent/flatkit.json", "names"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_schema_to_file() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("schema.json");

    cli()
        .arg("schema")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let schema: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(schema["title"], "Flatkit Options");
}

#[test]
fn test_schema_to_stdout() {
    cli()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Flatkit Options\""));
}
