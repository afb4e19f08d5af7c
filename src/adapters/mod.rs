//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `git/` - Clone, stage, commit and push via the `git` executable
//! - `text/` - Random sentences and commit phrases

pub mod git;
pub mod text;

pub use git::GitCli;
pub use text::Faker;
