//! Error types for document building and batch processing.

use std::path::PathBuf;

/// Why a source could not be turned into a Document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("no DOC_TITLE tag")]
    MissingTitle,
}

/// Failure while processing one document of a batch.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "{} would overwrite {} from {}",
        path.display(),
        output.display(),
        first.display()
    )]
    OutputClash {
        path: PathBuf,
        /// Earlier source that claimed `output`.
        first: PathBuf,
        output: PathBuf,
    },

    #[error("skipping {}: {source}", path.display())]
    Build { path: PathBuf, source: BuildError },
}

impl DocError {
    /// Missing titles are expected and are not counted as failures.
    pub fn is_skip(&self) -> bool {
        matches!(self, DocError::Build { .. })
    }
}
