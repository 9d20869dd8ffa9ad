//! Port contract for upload staging.

use crate::ingest::domain::StagedFile;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Read access to staged upload metadata.
///
/// The staging collaborator guarantees the file exists while the pipeline
/// runs and removes it afterwards, regardless of outcome.
pub trait Staging: Send + Sync {
    /// Describes the staged file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StagingError`] when the file is unreadable; the pipeline
    /// surfaces this to the caller without creating a job record.
    fn stat(&self, path: &Path) -> Result<StagedFile, StagingError>;
}

/// Errors returned by staging implementations.
#[derive(Debug, Clone, Error)]
pub enum StagingError {
    /// The staged file could not be read.
    #[error("staged file {path} is unreadable: {source}")]
    Unreadable {
        /// Staging path that was probed.
        path: String,
        /// Underlying filesystem error.
        source: Arc<std::io::Error>,
    },

    /// The staged path exists but is not a regular file.
    #[error("staged path {0} is not a regular file")]
    NotAFile(String),
}
