//! Publish pipeline: stage, commit, push
//!
//! The three steps run strictly in order and the first failure ends the
//! pipeline:
//!
//! ```text
//! Idle --add--> Staged --commit--> Committed --push--> Pushed
//!   \             \                  \
//!    +-------------+------------------+--> Failed(step)
//! ```
//!
//! Nothing is rolled back. A failed commit leaves the change staged and a
//! failed push leaves a local commit ahead of its upstream. An unchanged
//! file makes the commit step fail; that is reported, not skipped.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::core::ports::{GitError, TextGenerator, VersionControl};
use crate::paths;

/// A step of the publish pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStep {
    /// `git add README.md`
    Stage,
    /// `git commit -m <message>`
    Commit,
    /// `git push`
    Push,
}

impl std::fmt::Display for PublishStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stage => write!(f, "stage"),
            Self::Commit => write!(f, "commit"),
            Self::Push => write!(f, "push"),
        }
    }
}

/// The step that failed, with its cause
#[derive(Debug, Error)]
pub enum PublishError {
    /// Staging failed; nothing was committed or pushed
    #[error("staging failed: {0}")]
    Stage(#[source] GitError),

    /// Commit failed; the change is left staged
    #[error("commit '{message}' failed: {source}")]
    Commit {
        /// Message that was used
        message: String,
        /// Underlying git failure
        #[source]
        source: GitError,
    },

    /// Push failed; the commit is left local
    #[error("push failed: {0}")]
    Push(#[source] GitError),
}

impl PublishError {
    /// The step at which the pipeline stopped
    #[must_use]
    pub const fn step(&self) -> PublishStep {
        match self {
            Self::Stage(_) => PublishStep::Stage,
            Self::Commit { .. } => PublishStep::Commit,
            Self::Push(_) => PublishStep::Push,
        }
    }
}

/// A successfully pushed commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Published {
    /// Generated commit message
    pub message: String,
}

/// Stage the README in `repo_path`, commit it with a generated message and push
pub fn publish<V, T>(vcs: &V, text: &mut T, repo_path: &Path) -> Result<Published, PublishError>
where
    V: VersionControl + ?Sized,
    T: TextGenerator + ?Sized,
{
    log::info!("Staging changes...");
    vcs.add(repo_path, paths::README).map_err(PublishError::Stage)?;

    let message = text.phrase();
    log::info!("Creating commit: {message}");
    if let Err(source) = vcs.commit(repo_path, &message) {
        return Err(PublishError::Commit { message, source });
    }

    log::info!("Pushing to remote...");
    vcs.push(repo_path).map_err(PublishError::Push)?;

    Ok(Published { message })
}
