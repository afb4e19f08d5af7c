//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use autocommit::output::{OperationResult, OutputMode};
use autocommit::paths;

/// autocommit - Keep repositories active with generated README updates
#[derive(Parser, Debug)]
#[command(
    name = "autocommit",
    version,
    about = "Keep repositories active with generated README updates",
    long_about = "Mirror every configured repository, pick one at random, append a\n\
                  timestamped note to its README.md, then commit and push it.\n\n\
                  Configuration is read from the environment (GIT_USERNAME,\n\
                  GIT_ACCESS_TOKEN, REPOS, GIT_REMOTE_BASE), seeded from .env."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Load variables from this file instead of ./.env (must exist)
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Directory holding the local mirrors
    #[arg(long, global = true, value_name = "DIR", default_value = paths::REPOS_DIR)]
    pub repos_dir: PathBuf,

    /// Command to run, `run` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Mirror, update one random README, commit and push (default)
    Run,

    /// Show configured repositories and whether they are mirrored
    Status,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let env_file = cli.env_file.as_deref();
    let result = match cli.command {
        None | Some(Command::Run) => commands::run(env_file, &cli.repos_dir, output_mode),
        Some(Command::Status) => commands::status(env_file, &cli.repos_dir, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("autocommit v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
    };

    if output_mode == OutputMode::Json {
        if let Err(e) = &result {
            OperationResult {
                success: false,
                message: format!("{e:#}"),
            }
            .render(output_mode);
        }
    }
    result
}
