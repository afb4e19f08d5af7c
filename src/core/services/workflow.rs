//! End-to-end run: ensure mirrors, select, mutate, publish
//!
//! Everything happens sequentially on the calling thread. Exactly one
//! repository is mutated and published per run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::config::RunConfig;
use crate::core::models::{Mutation, RepoId};
use crate::core::ports::{TextGenerator, VersionControl};
use crate::core::services::ensurer::{EnsureReport, ensure_mirrors};
use crate::core::services::mutator::{MutationError, append_update};
use crate::core::services::publisher::{PublishError, publish};
use crate::core::services::{resolver, selector};
use crate::paths;

/// Fatal workflow failure
///
/// Clone failures are not listed here; they are recorded in the
/// [`EnsureReport`] and the run continues.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The repos directory could not be created
    #[error("failed to create repos directory {}: {source}", path.display())]
    ReposDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// No repository to select from
    #[error("no repositories configured")]
    NoRepositories,

    /// README update failed
    #[error(transparent)]
    Mutation(#[from] MutationError),

    /// Stage, commit or push failed
    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// Summary of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Mirror status of every configured repository
    pub ensure: EnsureReport,
    /// Repository that received the update
    pub selected: RepoId,
    /// Local mirror of the selected repository
    pub repo_path: PathBuf,
    /// The appended update
    pub mutation: Mutation,
    /// Message of the pushed commit
    pub commit_message: String,
}

/// The workflow with its collaborators
#[derive(Debug)]
pub struct Workflow<V, T, R> {
    vcs: V,
    text: T,
    rng: R,
}

impl<V, T, R> Workflow<V, T, R>
where
    V: VersionControl,
    T: TextGenerator,
    R: Rng,
{
    /// Assemble a workflow
    pub const fn new(vcs: V, text: T, rng: R) -> Self {
        Self { vcs, text, rng }
    }

    /// The version control collaborator
    pub const fn vcs(&self) -> &V {
        &self.vcs
    }

    /// The text collaborator
    pub const fn text(&self) -> &T {
        &self.text
    }

    /// Run once, stamping the update with the local time of the README write
    pub fn run(&mut self, config: &RunConfig, repos_dir: &Path) -> Result<RunReport, WorkflowError> {
        self.run_with_clock(config, repos_dir, || Local::now().naive_local())
    }

    /// Run once, stamping the update with `at`
    pub fn run_at(
        &mut self,
        config: &RunConfig,
        repos_dir: &Path,
        at: NaiveDateTime,
    ) -> Result<RunReport, WorkflowError> {
        self.run_with_clock(config, repos_dir, move || at)
    }

    /// Run once, reading `clock` after mirrors are ensured and a repository
    /// is selected, right before the README is written
    pub fn run_with_clock<C>(
        &mut self,
        config: &RunConfig,
        repos_dir: &Path,
        clock: C,
    ) -> Result<RunReport, WorkflowError>
    where
        C: FnOnce() -> NaiveDateTime,
    {
        fs::create_dir_all(repos_dir).map_err(|source| WorkflowError::ReposDir {
            path: repos_dir.to_path_buf(),
            source,
        })?;

        log::info!("Checking repositories...");
        let ensure = ensure_mirrors(&self.vcs, &config.remote, &config.repos, repos_dir);

        let selected = selector::select(&config.repos, &mut self.rng)
            .ok_or(WorkflowError::NoRepositories)?
            .clone();
        let repo_path = resolver::local_path(repos_dir, &selected);
        log::info!("Selected random repo: {selected}");

        let mutation = append_update(&paths::readme_in(&repo_path), &mut self.text, clock())?;

        log::info!("Committing changes...");
        let published = publish(&self.vcs, &mut self.text, &repo_path)?;

        Ok(RunReport {
            ensure,
            selected,
            repo_path,
            mutation,
            commit_message: published.message,
        })
    }
}
