//! Version control system port
//!
//! Defines the interface for interacting with version control. Every
//! operation on an existing working copy takes that working copy's path
//! explicitly; implementations must not rely on the process working
//! directory.

use std::path::Path;

use thiserror::Error;

use crate::core::models::RemoteUrl;

/// Failure of a single version control invocation
#[derive(Debug, Error)]
pub enum GitError {
    /// The executable could not be started
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        /// The invocation, with credentials masked
        command: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The command ran and reported failure
    #[error("`{command}` failed ({})", exit_description(.code))]
    Failed {
        /// The invocation, with credentials masked
        command: String,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
    },
}

fn exit_description(code: &Option<i32>) -> String {
    code.map_or_else(|| "terminated by signal".to_string(), |c| format!("exit code {c}"))
}

/// Version control system abstraction
///
/// Implementations handle interactions with git or other VCS systems.
pub trait VersionControl {
    /// Clone `url` into `dest`
    fn clone_repo(&self, url: &RemoteUrl, dest: &Path) -> Result<(), GitError>;

    /// Stage `pathspec` in the working copy at `workdir`
    fn add(&self, workdir: &Path, pathspec: &str) -> Result<(), GitError>;

    /// Commit staged changes in `workdir` with `message`
    fn commit(&self, workdir: &Path, message: &str) -> Result<(), GitError>;

    /// Push the current branch of `workdir` to its upstream
    fn push(&self, workdir: &Path) -> Result<(), GitError>;
}
