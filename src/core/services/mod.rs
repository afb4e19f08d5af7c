//! Workflow services
//!
//! Each step of a run, plus the orchestration tying them together.
//! I/O goes through the port traits, except for the README file and the
//! repos directory which are touched directly.
//!
//! - [`resolver`] - Identifier to local path and clone URL
//! - [`ensurer`] - Clone missing mirrors
//! - [`selector`] - Pick the repository to update
//! - [`mutator`] - Append an update to the README
//! - [`publisher`] - Stage, commit and push
//! - [`workflow`] - The full run

pub mod ensurer;
pub mod mutator;
pub mod publisher;
pub mod resolver;
pub mod selector;
pub mod workflow;

pub use ensurer::{EnsureEntry, EnsureOutcome, EnsureReport, ensure_mirrors};
pub use mutator::{MutationError, append_update};
pub use publisher::{PublishError, PublishStep, Published, publish};
pub use selector::select;
pub use workflow::{RunReport, Workflow, WorkflowError};
