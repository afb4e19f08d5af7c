//! Repository identifiers
//!
//! A repository is named `owner/name` on the forge. Locally only the last
//! segment is used, so `alice/notes` is mirrored at `<repos_dir>/notes`.

use serde::Serialize;
use thiserror::Error;

/// Error returned when a string is not an `owner/name` identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid repository '{entry}': expected owner/name")]
pub struct ParseRepoIdError {
    /// The rejected entry
    pub entry: String,
}

/// A fully-qualified repository identifier (`owner/name`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RepoId(String);

impl RepoId {
    /// The identifier as written in the configuration
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the last `/`
    #[must_use]
    pub fn owner(&self) -> &str {
        self.0.rsplit_once('/').map_or("", |(owner, _)| owner)
    }

    /// Last path segment, used as the local directory name
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl std::fmt::Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for RepoId {
    type Err = ParseRepoIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let valid = trimmed.contains('/') && trimmed.split('/').all(is_valid_segment);

        if valid {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ParseRepoIdError {
                entry: s.to_string(),
            })
        }
    }
}

// `.` and `..` would resolve the mirror outside the repos directory
fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && segment != "." && segment != ".." && !segment.contains(char::is_whitespace)
}
