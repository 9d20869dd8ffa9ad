//! Filesystem staging adapter.

use std::path::Path;
use std::sync::Arc;

use crate::ingest::{
    domain::StagedFile,
    ports::{Staging, StagingError},
};

/// Staging backed by the local filesystem.
///
/// Reads metadata only; the file contents are left to the decoder, and
/// removal of the staged file stays with the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStaging;

impl FsStaging {
    /// Creates a filesystem staging adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Staging for FsStaging {
    fn stat(&self, path: &Path) -> Result<StagedFile, StagingError> {
        let metadata = std::fs::metadata(path).map_err(|err| StagingError::Unreadable {
            path: path.display().to_string(),
            source: Arc::new(err),
        })?;
        if !metadata.is_file() {
            return Err(StagingError::NotAFile(path.display().to_string()));
        }
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unknown")
            .to_owned();
        Ok(StagedFile {
            file_name,
            file_path: path.display().to_string(),
            file_size: metadata.len(),
        })
    }
}
