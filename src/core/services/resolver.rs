//! Repository identifier resolution
//!
//! Maps a configured identifier to its local mirror directory and its
//! credential-bearing clone URL.

use std::path::{Path, PathBuf};

use crate::core::models::{Remote, RemoteUrl, RepoId};
use crate::paths;

/// Local mirror directory of `repo` under `repos_dir`
#[must_use]
pub fn local_path(repos_dir: &Path, repo: &RepoId) -> PathBuf {
    paths::mirror_dir(repos_dir, repo.name())
}

/// Clone URL of `repo`; computed on demand and never stored
#[must_use]
pub fn remote_url(remote: &Remote, repo: &RepoId) -> RemoteUrl {
    remote.url_for(repo)
}
