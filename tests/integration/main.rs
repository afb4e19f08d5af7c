//! Integration tests for the autocommit CLI
//!
//! These drive the binary against bare git remotes in a temporary
//! directory, cloned over `file://`.


#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create an autocommit command with a clean config environment
fn autocommit() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("autocommit"));
    for key in ["REPOS", "GIT_USERNAME", "GIT_ACCESS_TOKEN", "GIT_REMOTE_BASE"] {
        cmd.env_remove(key);
    }
    cmd.env("RUST_LOG", "info");
    cmd
}

#[test]
fn test_version() {
    autocommit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("autocommit"));
}

#[test]
fn test_help() {
    autocommit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("append a"));
}

#[test]
fn test_version_json() {
    autocommit()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_empty_repos_exits_before_touching_disk() {
    let temp = TempDir::new().unwrap();

    autocommit()
        .env("REPOS", "")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no repositories configured"));

    assert!(!temp.path().join("repos").exists());
}

#[test]
fn test_unset_repos_exits_with_failure() {
    let temp = TempDir::new().unwrap();

    autocommit().arg("run").current_dir(temp.path()).assert().code(1);
    assert!(!temp.path().join("repos").exists());
}

#[test]
fn test_invalid_repo_entry_is_rejected() {
    let temp = TempDir::new().unwrap();

    autocommit()
        .env("REPOS", "alice/one,notes")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected owner/name"));
}

#[test]
fn test_parent_dir_entry_never_touches_working_directory() {
    let temp = TempDir::new().unwrap();

    autocommit()
        .env("REPOS", "alice/..")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected owner/name"));

    assert!(!temp.path().join("README.md").exists());
    assert!(!temp.path().join("repos").exists());
}

#[test]
fn test_shared_local_name_is_rejected() {
    let temp = TempDir::new().unwrap();

    autocommit()
        .env("REPOS", "alice/notes,bob/notes")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("both mirror to 'notes'"));

    assert!(!temp.path().join("repos").exists());
}

#[test]
fn test_missing_explicit_env_file_fails() {
    let temp = TempDir::new().unwrap();

    autocommit()
        .args(["--env-file", "missing.env", "status"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.env"));
}

#[test]
fn test_status_reads_dotenv_in_working_directory() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".env"), "REPOS=\"alice/one, bob/two\"\n").unwrap();
    std::fs::create_dir_all(temp.path().join("repos/two")).unwrap();

    let output = autocommit()
        .args(["--json", "status"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["repos"][0]["repo"], "alice/one");
    assert_eq!(json["repos"][0]["present"], false);
    assert_eq!(json["repos"][1]["repo"], "bob/two");
    assert_eq!(json["repos"][1]["present"], true);
    assert_eq!(json["authenticated"], false);
}

#[test]
fn test_process_environment_overrides_dotenv() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".env"), "REPOS=alice/one\n").unwrap();

    autocommit()
        .env("REPOS", "carol/three")
        .arg("status")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("carol/three"))
        .stdout(predicate::str::contains("alice/one").not());
}

#[test]
fn test_status_never_prints_token() {
    let temp = TempDir::new().unwrap();

    autocommit()
        .env("REPOS", "alice/one")
        .env("GIT_USERNAME", "alice")
        .env("GIT_ACCESS_TOKEN", "ghp_supersecret")
        .args(["--json", "status"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ghp_supersecret").not())
        .stdout(predicate::str::contains("\"authenticated\": true"));
}
