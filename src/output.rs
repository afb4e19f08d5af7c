//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Progress messages go
//! through `log`; these types render the final result of a command.

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::RepoId;
use crate::core::services::{EnsureOutcome, RunReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a full run
#[derive(Debug, Serialize)]
pub struct RunResult {
    /// Whether the update was pushed
    pub success: bool,
    /// Details of the run
    #[serde(flatten)]
    pub report: RunReport,
}

impl From<RunReport> for RunResult {
    fn from(report: RunReport) -> Self {
        Self {
            success: true,
            report,
        }
    }
}

impl RunResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let report = &self.report;

        println!("Repositories:");
        for entry in &report.ensure.entries {
            let marker = match &entry.outcome {
                EnsureOutcome::Present => "present".normal(),
                EnsureOutcome::Cloned => "cloned".green(),
                EnsureOutcome::Failed(_) => "clone failed".red(),
            };
            println!("  {:<30} {marker}", entry.repo.as_str());
        }

        println!("\nSelected: {}", report.selected.as_str().bold());
        if report.mutation.created {
            println!("Created:  {}", report.mutation.path.display());
        } else {
            println!("Updated:  {}", report.mutation.path.display());
        }
        println!("Commit:   {}", report.commit_message);
        println!("\n{}", "Successfully committed and pushed changes!".green());
    }
}

/// Local state of one configured repository
#[derive(Debug, Serialize)]
pub struct StatusEntry {
    /// Configured identifier
    pub repo: RepoId,
    /// Local mirror directory
    pub path: PathBuf,
    /// Whether the mirror directory exists
    pub present: bool,
}

/// Result of the status command
#[derive(Debug, Serialize)]
pub struct StatusResult {
    /// Directory holding the mirrors
    pub repos_dir: PathBuf,
    /// Clone source, without credentials
    pub remote_base: String,
    /// Whether credentials are configured
    pub authenticated: bool,
    /// One entry per configured repository
    pub repos: Vec<StatusEntry>,
}

impl StatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let auth = if self.authenticated {
            "with credentials"
        } else {
            "anonymous"
        };
        println!("Remote:    {} ({auth})", self.remote_base);
        println!("Repos dir: {}\n", self.repos_dir.display());

        let present = self.repos.iter().filter(|r| r.present).count();
        println!("{} repositories configured, {present} mirrored:", self.repos.len());
        for entry in &self.repos {
            let marker = if entry.present {
                "mirrored".green()
            } else {
                "missing".yellow()
            };
            println!("  {:<30} {marker}  {}", entry.repo.as_str(), entry.path.display());
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
