//! The default command: one full update cycle

use std::path::Path;

use anyhow::Context;

use autocommit::adapters::{Faker, GitCli};
use autocommit::config::RunConfig;
use autocommit::core::services::Workflow;
use autocommit::output::{OutputMode, RunResult};

/// Mirror all repositories, update one README and publish it
pub fn run(env_file: Option<&Path>, repos_dir: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let config = RunConfig::load(env_file).context("invalid configuration")?;
    log::info!("Loaded {} repositories", config.repos.len());

    let mut workflow = Workflow::new(GitCli::new(), Faker::new(rand::thread_rng()), rand::thread_rng());
    let report = workflow.run(&config, repos_dir)?;

    let failed = report.ensure.failed();
    if failed > 0 {
        log::warn!("{failed} repositories could not be cloned");
    }

    RunResult::from(report).render(mode);
    Ok(())
}
