//! Repository port for ingestion job persistence and filtered listing.

use crate::identity::UserId;
use crate::ingest::domain::{IngestJob, JobId, JobStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for job repository operations.
pub type JobRepositoryResult<T> = Result<T, JobRepositoryError>;

/// Filter predicate shared by [`JobRepository::find_page`] and
/// [`JobRepository::count`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    /// Owner whose jobs are listed.
    pub user_id: UserId,
    /// Constrains the lifecycle status only when set; `None` lists every
    /// status.
    pub status: Option<JobStatus>,
}

/// Ingestion job persistence contract.
///
/// Listing reads return records ordered by `uploaded_at` descending (newest
/// status change first); records with equal timestamps order newest-inserted
/// first.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Stores a new job.
    ///
    /// # Errors
    ///
    /// Returns [`JobRepositoryError::DuplicateJob`] when the identifier
    /// already exists.
    async fn create(&self, job: &IngestJob) -> JobRepositoryResult<()>;

    /// Persists changes to an existing job (status and `uploaded_at`).
    ///
    /// # Errors
    ///
    /// Returns [`JobRepositoryError::NotFound`] when the job does not exist.
    async fn update(&self, job: &IngestJob) -> JobRepositoryResult<()>;

    /// Returns one page of jobs matching the query, newest first.
    async fn find_page(
        &self,
        query: &JobQuery,
        offset: u64,
        limit: u64,
    ) -> JobRepositoryResult<Vec<IngestJob>>;

    /// Counts jobs matching the query.
    async fn count(&self, query: &JobQuery) -> JobRepositoryResult<u64>;
}

/// Errors returned by job repository implementations.
#[derive(Debug, Clone, Error)]
pub enum JobRepositoryError {
    /// A job with the same identifier already exists.
    #[error("duplicate job identifier: {0}")]
    DuplicateJob(JobId),

    /// The job was not found.
    #[error("job not found: {0}")]
    NotFound(JobId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl JobRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
