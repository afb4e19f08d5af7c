//! Git integration adapter
//!
//! Implements `VersionControl` by running the `git` executable. Output is
//! not captured: git writes straight to the operator's terminal.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use crate::core::models::RemoteUrl;
use crate::core::ports::{GitError, VersionControl};

/// Git-based version control implementation
#[derive(Debug, Clone)]
pub struct GitCli {
    /// Executable to run
    program: String,
}

impl GitCli {
    /// Create an adapter running `git` from `PATH`
    #[must_use]
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Create an adapter running a specific executable
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run git with inherited stdio, optionally inside `workdir`
    ///
    /// `shown` is the command as it may appear in errors and logs.
    fn run(&self, workdir: Option<&Path>, args: &[&OsStr], shown: String) -> Result<(), GitError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args).env("GIT_TERMINAL_PROMPT", "0");
        if let Some(dir) = workdir {
            cmd.current_dir(dir);
        }

        log::debug!("Running {shown}");
        let status = cmd.status().map_err(|source| GitError::Spawn {
            command: shown.clone(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(GitError::Failed {
                command: shown,
                code: status.code(),
            })
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitCli {
    fn clone_repo(&self, url: &RemoteUrl, dest: &Path) -> Result<(), GitError> {
        let shown = format!("git clone {url} {}", dest.display());
        self.run(
            None,
            &[OsStr::new("clone"), OsStr::new(url.expose()), dest.as_os_str()],
            shown,
        )
    }

    fn add(&self, workdir: &Path, pathspec: &str) -> Result<(), GitError> {
        self.run(
            Some(workdir),
            &[OsStr::new("add"), OsStr::new(pathspec)],
            format!("git add {pathspec}"),
        )
    }

    fn commit(&self, workdir: &Path, message: &str) -> Result<(), GitError> {
        self.run(
            Some(workdir),
            &[OsStr::new("commit"), OsStr::new("-m"), OsStr::new(message)],
            format!("git commit -m {message:?}"),
        )
    }

    fn push(&self, workdir: &Path) -> Result<(), GitError> {
        self.run(Some(workdir), &[OsStr::new("push")], "git push".to_string())
    }
}
