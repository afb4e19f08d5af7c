//! Fixed file and directory names
//!
//! The tool works relative to the directory it is started from unless the
//! caller overrides the repos directory.

use std::path::{Path, PathBuf};

/// Default directory holding one mirror per configured repository
pub const REPOS_DIR: &str = "repos";

/// The only file the tool ever modifies inside a mirror
pub const README: &str = "README.md";

/// Default dotenv file
pub const ENV_FILE: &str = ".env";

/// Default repos directory as a path
#[must_use]
pub fn default_repos_dir() -> PathBuf {
    PathBuf::from(REPOS_DIR)
}

/// Path of the mirror for a repository with the given local name
#[must_use]
pub fn mirror_dir(repos_dir: &Path, name: &str) -> PathBuf {
    repos_dir.join(name)
}

/// Path of the README inside a mirror
#[must_use]
pub fn readme_in(mirror: &Path) -> PathBuf {
    mirror.join(README)
}
