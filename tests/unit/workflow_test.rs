//! Tests for the full run, driven by recording mocks
//!
//! `StepRng::new(0, 0)` always yields zero, so the first configured
//! repository is selected.

use std::cell::Cell;
use std::fs;

use autocommit::config::RunConfig;
use autocommit::core::models::{README_BOILERPLATE, Remote};
use autocommit::core::services::{PublishStep, Workflow, WorkflowError};
use chrono::{NaiveDate, NaiveDateTime};
use rand::rngs::mock::StepRng;
use tempfile::TempDir;

use crate::common::mocks::{Call, FIXED_PHRASE, FixedText, Op, RecordingVcs};

fn config(repos: &str) -> RunConfig {
    RunConfig {
        remote: Remote::default(),
        repos: autocommit::config::parse_repos(repos).unwrap(),
    }
}

fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 2, 3).unwrap().and_hms_opt(4, 5, 6).unwrap()
}

fn workflow(vcs: RecordingVcs) -> Workflow<RecordingVcs, FixedText, StepRng> {
    Workflow::new(vcs, FixedText::default(), StepRng::new(0, 0))
}

#[test]
fn test_fresh_run_clones_mutates_and_publishes() {
    let temp = TempDir::new().unwrap();
    let repos_dir = temp.path().join("repos");
    let mut wf = workflow(RecordingVcs::new());

    let report = wf.run_at(&config("alice/one,bob/two"), &repos_dir, at()).unwrap();

    assert!(repos_dir.join("one").is_dir());
    assert!(repos_dir.join("two").is_dir());
    assert_eq!(report.ensure.cloned(), 2);
    assert_eq!(report.selected.as_str(), "alice/one");
    assert_eq!(report.repo_path, repos_dir.join("one"));
    assert_eq!(report.commit_message, FIXED_PHRASE);

    let readme = fs::read_to_string(repos_dir.join("one/README.md")).unwrap();
    assert!(readme.starts_with(README_BOILERPLATE));
    assert!(readme.contains("## Update 2025-02-03 04:05:06"));
    assert!(!repos_dir.join("two/README.md").exists());

    let calls = wf.vcs().calls();
    assert_eq!(calls.len(), 5);
    assert!(matches!(&calls[2], Call::Add { workdir, .. } if *workdir == repos_dir.join("one")));
    assert!(matches!(&calls[4], Call::Push { .. }));
}

#[test]
fn test_existing_mirrors_are_not_recloned() {
    let temp = TempDir::new().unwrap();
    let repos_dir = temp.path().join("repos");
    fs::create_dir_all(repos_dir.join("one")).unwrap();
    fs::create_dir_all(repos_dir.join("two")).unwrap();
    let mut wf = workflow(RecordingVcs::new());

    let report = wf.run_at(&config("alice/one,bob/two"), &repos_dir, at()).unwrap();

    assert_eq!(wf.vcs().clone_count(), 0);
    assert_eq!(report.ensure.cloned(), 0);
}

#[test]
fn test_failed_clone_of_other_repo_is_tolerated() {
    let temp = TempDir::new().unwrap();
    let repos_dir = temp.path().join("repos");
    let mut wf = workflow(RecordingVcs::new().failing_clone_of("two"));

    let report = wf.run_at(&config("alice/one,bob/two"), &repos_dir, at()).unwrap();

    assert_eq!(report.ensure.failed(), 1);
    assert_eq!(report.selected.as_str(), "alice/one");
}

#[test]
fn test_selected_repo_without_mirror_fails_mutation() {
    let temp = TempDir::new().unwrap();
    let repos_dir = temp.path().join("repos");
    let mut wf = workflow(RecordingVcs::new().failing_clone_of("one"));

    let err = wf.run_at(&config("alice/one,bob/two"), &repos_dir, at()).unwrap_err();

    assert!(matches!(err, WorkflowError::Mutation(_)));
    assert!(!wf.vcs().calls().iter().any(|c| matches!(c, Call::Add { .. })));
}

#[test]
fn test_publish_failure_aborts_run() {
    let temp = TempDir::new().unwrap();
    let repos_dir = temp.path().join("repos");
    let mut wf = workflow(RecordingVcs::failing(Op::Commit));

    let err = wf.run_at(&config("alice/one"), &repos_dir, at()).unwrap_err();

    match err {
        WorkflowError::Publish(e) => assert_eq!(e.step(), PublishStep::Commit),
        other => panic!("unexpected error: {other}"),
    }
    // README change stays on disk, no rollback
    assert!(repos_dir.join("one/README.md").exists());
}

#[test]
fn test_repos_dir_creation_failure_is_fatal() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("repos");
    fs::write(&blocker, "not a directory").unwrap();
    let mut wf = workflow(RecordingVcs::new());

    let err = wf.run_at(&config("alice/one"), &blocker, at()).unwrap_err();

    assert!(matches!(err, WorkflowError::ReposDir { .. }));
    assert!(wf.vcs().calls().is_empty());
}

#[test]
fn test_run_uses_mutation_then_publish_text() {
    let temp = TempDir::new().unwrap();
    let mut wf = workflow(RecordingVcs::new());

    wf.run_at(&config("alice/one"), &temp.path().join("repos"), at()).unwrap();

    assert_eq!(wf.text().sentences, 1);
    assert_eq!(wf.text().phrases, 1);
}


#[test]
fn test_timestamp_is_taken_after_mirrors_are_ensured() {
    let temp = TempDir::new().unwrap();
    let repos_dir = temp.path().join("repos");
    let mut wf = workflow(RecordingVcs::new());
    let mirrors_seen = Cell::new(None);

    let report = wf
        .run_with_clock(&config("alice/one,bob/two"), &repos_dir, || {
            let cloned = repos_dir.join("one").is_dir() && repos_dir.join("two").is_dir();
            mirrors_seen.set(Some(cloned));
            at()
        })
        .unwrap();

    assert_eq!(mirrors_seen.get(), Some(true));
    assert_eq!(report.mutation.timestamp, at());
}

#[test]
fn test_clock_is_not_read_when_run_fails_early() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("repos");
    fs::write(&blocker, "not a directory").unwrap();
    let mut wf = workflow(RecordingVcs::new());
    let read = Cell::new(false);

    let err = wf
        .run_with_clock(&config("alice/one"), &blocker, || {
            read.set(true);
            at()
        })
        .unwrap_err();

    assert!(matches!(err, WorkflowError::ReposDir { .. }));
    assert!(!read.get());
}
