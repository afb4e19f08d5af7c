//! Run configuration
//!
//! Built once at startup from the process environment, optionally seeded
//! from a `.env` file, and immutable for the rest of the run.
//!
//! | Variable           | Meaning                               |
//! |--------------------|---------------------------------------|
//! | `GIT_USERNAME`     | account embedded in clone URLs        |
//! | `GIT_ACCESS_TOKEN` | token embedded in clone URLs          |
//! | `REPOS`            | comma-separated `owner/name` list     |
//! | `GIT_REMOTE_BASE`  | clone base URL (`https://github.com`) |

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::{Credentials, ParseRepoIdError, Remote, RepoId};
use crate::paths;

/// Environment variable holding the account identifier
pub const ENV_USERNAME: &str = "GIT_USERNAME";
/// Environment variable holding the access token
pub const ENV_ACCESS_TOKEN: &str = "GIT_ACCESS_TOKEN";
/// Environment variable holding the repository list
pub const ENV_REPOS: &str = "REPOS";
/// Environment variable overriding the clone base URL
pub const ENV_REMOTE_BASE: &str = "GIT_REMOTE_BASE";

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested env file could not be loaded
    #[error("failed to load env file {}: {source}", path.display())]
    EnvFile {
        /// Requested file
        path: PathBuf,
        /// dotenvy failure
        #[source]
        source: dotenvy::Error,
    },

    /// `REPOS` is unset or lists nothing
    #[error("no repositories configured (set REPOS=owner/name,...)")]
    NoRepositories,

    /// An entry of `REPOS` is not `owner/name`
    #[error(transparent)]
    InvalidRepository(#[from] ParseRepoIdError),

    /// Two identifiers would share one local mirror directory
    #[error("repositories '{first}' and '{second}' both mirror to '{name}'")]
    NameCollision {
        /// Identifier listed first
        first: RepoId,
        /// Identifier listed later
        second: RepoId,
        /// Shared local directory name
        name: String,
    },
}

/// Everything a run needs to know, fixed for its duration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Clone source and credentials
    pub remote: Remote,
    /// Configured repositories, in order, without duplicates. Never empty.
    pub repos: Vec<RepoId>,
}

impl RunConfig {
    /// Load `env_file` (or `./.env` when present) and read the environment
    ///
    /// An explicit `env_file` must exist. Variables already set in the
    /// process environment take precedence over the file.
    pub fn load(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        load_env_file(env_file)?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let repos = parse_repos(&lookup(ENV_REPOS).unwrap_or_default())?;

        let credentials = Credentials::new(
            lookup(ENV_USERNAME).unwrap_or_default().trim(),
            lookup(ENV_ACCESS_TOKEN).unwrap_or_default().trim(),
        );
        let base = lookup(ENV_REMOTE_BASE)
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| Remote::DEFAULT_BASE.to_string());

        Ok(Self {
            remote: Remote::new(base, credentials),
            repos,
        })
    }
}

/// Parse a comma-separated repository list
///
/// Entries are trimmed and empty entries ignored. Repeated identifiers are
/// dropped after the first occurrence with a warning. Distinct identifiers
/// with the same last segment are rejected, since they would share a mirror.
pub fn parse_repos(raw: &str) -> Result<Vec<RepoId>, ConfigError> {
    let mut seen = HashSet::new();
    let mut by_name: HashMap<String, RepoId> = HashMap::new();
    let mut repos = Vec::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let repo: RepoId = entry.parse()?;
        if !seen.insert(repo.clone()) {
            log::warn!("Ignoring duplicate repository {repo}");
            continue;
        }
        if let Some(first) = by_name.get(repo.name()) {
            return Err(ConfigError::NameCollision {
                first: first.clone(),
                name: repo.name().to_string(),
                second: repo,
            });
        }
        by_name.insert(repo.name().to_string(), repo.clone());
        repos.push(repo);
    }

    if repos.is_empty() {
        return Err(ConfigError::NoRepositories);
    }
    Ok(repos)
}

fn load_env_file(env_file: Option<&Path>) -> Result<(), ConfigError> {
    match env_file {
        Some(path) => {
            dotenvy::from_path(path).map_err(|source| ConfigError::EnvFile {
                path: path.to_path_buf(),
                source,
            })?;
            log::debug!("Loaded {}", path.display());
        },
        None => {
            let default = Path::new(paths::ENV_FILE);
            if default.exists() {
                dotenvy::from_path(default).map_err(|source| ConfigError::EnvFile {
                    path: default.to_path_buf(),
                    source,
                })?;
                log::debug!("Loaded {}", paths::ENV_FILE);
            } else {
                log::debug!("No {} file, using process environment only", paths::ENV_FILE);
            }
        },
    }
    Ok(())
}
