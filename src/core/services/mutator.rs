//! README mutation
//!
//! Appends a timestamped, generated note to a file. The existing bytes are
//! kept verbatim as a prefix; the file is rewritten in place, not through a
//! temporary file and rename.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::core::models::{Mutation, README_BOILERPLATE};
use crate::core::ports::TextGenerator;

/// Failure while updating the target file
#[derive(Debug, Error)]
pub enum MutationError {
    /// The existing file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Target file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The updated content could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Target file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Append an update block stamped with `at` to the file at `path`
///
/// A missing file is created with [`README_BOILERPLATE`] before the block.
pub fn append_update<T>(path: &Path, text: &mut T, at: NaiveDateTime) -> Result<Mutation, MutationError>
where
    T: TextGenerator + ?Sized,
{
    let (mut content, created) = match fs::read(path) {
        Ok(bytes) => (bytes, false),
        Err(e) if e.kind() == io::ErrorKind::NotFound => (README_BOILERPLATE.as_bytes().to_vec(), true),
        Err(source) => {
            return Err(MutationError::Read {
                path: path.to_path_buf(),
                source,
            });
        },
    };

    let mutation = Mutation {
        path: path.to_path_buf(),
        created,
        timestamp: at,
        sentence: text.sentence(),
    };
    content.extend_from_slice(mutation.block().as_bytes());

    fs::write(path, content).map_err(|source| MutationError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Appended update to {}", path.display());
    Ok(mutation)
}
