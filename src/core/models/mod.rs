//! Domain models
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`RepoId`] - A configured `owner/name` repository
//! - [`Remote`] - Where repositories are cloned from, with credentials
//! - [`RemoteUrl`] - A clone URL whose token never leaks into logs
//! - [`Mutation`] - The update appended to a README

mod mutation;
mod remote;
mod repo;

pub use mutation::{Mutation, README_BOILERPLATE, TIMESTAMP_FORMAT};
pub use remote::{Credentials, Remote, RemoteUrl};
pub use repo::{ParseRepoIdError, RepoId};
