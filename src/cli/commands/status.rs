//! Show configured repositories and their local mirrors

use std::path::Path;

use anyhow::Context;

use autocommit::config::RunConfig;
use autocommit::core::services::resolver;
use autocommit::output::{OutputMode, StatusEntry, StatusResult};

/// Report mirror presence without cloning, mutating or running git
pub fn status(env_file: Option<&Path>, repos_dir: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let config = RunConfig::load(env_file).context("invalid configuration")?;

    let repos = config
        .repos
        .iter()
        .map(|repo| {
            let path = resolver::local_path(repos_dir, repo);
            StatusEntry {
                repo: repo.clone(),
                present: path.exists(),
                path,
            }
        })
        .collect();

    StatusResult {
        repos_dir: repos_dir.to_path_buf(),
        remote_base: config.remote.base.clone(),
        authenticated: !config.remote.credentials.is_empty(),
        repos,
    }
    .render(mode);
    Ok(())
}
