//! Core domain logic for autocommit
//!
//! All external interactions (git, random text) are abstracted through port
//! traits so the workflow can be driven by test doubles.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`RepoId`, `Remote`, `Mutation`)
//! - `services/` - Workflow steps and their orchestration
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
