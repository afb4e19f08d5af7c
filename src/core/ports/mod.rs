//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the workflow and external
//! systems (git, random text).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Recording implementations for unit tests
//! - **Flexibility**: Swap implementations without changing business logic
//! - **Clarity**: Clear boundaries between layers

mod text;
mod vcs;

pub use text::{SENTENCE_WORDS, TextGenerator};
pub use vcs::{GitError, VersionControl};
