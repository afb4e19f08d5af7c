//! Local mirror management
//!
//! Makes sure every configured repository has a working copy under the
//! repos directory. Existing directories are trusted as-is: they are never
//! re-cloned, fetched or validated.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::models::{Remote, RepoId};
use crate::core::ports::VersionControl;
use crate::core::services::resolver;

/// What happened to one repository during [`ensure_mirrors`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum EnsureOutcome {
    /// The mirror directory already existed
    Present,
    /// The repository was cloned in this run
    Cloned,
    /// Cloning failed; the repository was skipped
    Failed(String),
}

/// Per-repository entry of an [`EnsureReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnsureEntry {
    /// Configured identifier
    pub repo: RepoId,
    /// Local mirror directory
    pub path: PathBuf,
    /// Result for this repository
    pub outcome: EnsureOutcome,
}

/// Result of ensuring all mirrors, in configuration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnsureReport {
    /// One entry per configured repository
    pub entries: Vec<EnsureEntry>,
}

impl EnsureReport {
    /// Number of repositories cloned in this run
    #[must_use]
    pub fn cloned(&self) -> usize {
        self.count(|o| matches!(o, EnsureOutcome::Cloned))
    }

    /// Number of repositories whose clone failed
    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, EnsureOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&EnsureOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}

/// Clone every repository in `repos` that has no mirror under `repos_dir`
///
/// Clone failures are logged and recorded in the report; they never abort
/// the loop. The caller is responsible for creating `repos_dir`.
pub fn ensure_mirrors<V>(vcs: &V, remote: &Remote, repos: &[RepoId], repos_dir: &Path) -> EnsureReport
where
    V: VersionControl + ?Sized,
{
    let entries = repos
        .iter()
        .map(|repo| {
            let path = resolver::local_path(repos_dir, repo);
            let outcome = ensure_one(vcs, remote, repo, &path);
            EnsureEntry {
                repo: repo.clone(),
                path,
                outcome,
            }
        })
        .collect();

    EnsureReport { entries }
}

fn ensure_one<V>(vcs: &V, remote: &Remote, repo: &RepoId, path: &Path) -> EnsureOutcome
where
    V: VersionControl + ?Sized,
{
    if path.exists() {
        log::info!("{} already exists", repo.name());
        return EnsureOutcome::Present;
    }

    log::info!("Cloning {repo}...");
    let url = resolver::remote_url(remote, repo);
    match vcs.clone_repo(&url, path) {
        Ok(()) => {
            log::info!("Cloned {repo}");
            EnsureOutcome::Cloned
        },
        Err(e) => {
            log::error!("Error cloning {repo}: {e}");
            EnsureOutcome::Failed(e.to_string())
        },
    }
}
