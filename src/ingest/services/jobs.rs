//! Service layer for listing ingestion jobs.

use crate::identity::UserId;
use crate::ingest::{
    domain::{IngestJob, JobStatus},
    ports::{JobQuery, JobRepository, JobRepositoryError},
};
use crate::paging::{Page, PageRequest};
use std::sync::Arc;
use thiserror::Error;

/// Status constraint for a job listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JobStatusFilter {
    /// No status constraint.
    #[default]
    All,
    /// Only jobs in the given status.
    Only(JobStatus),
}

impl From<JobStatus> for JobStatusFilter {
    fn from(status: JobStatus) -> Self {
        Self::Only(status)
    }
}

/// Filter for a user's job listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobListFilter {
    /// Status constraint.
    pub status: JobStatusFilter,
    /// Page to fetch.
    pub page: PageRequest,
}

/// Service-level errors for job queries.
#[derive(Debug, Error)]
pub enum JobQueryError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] JobRepositoryError),
}

/// Read-only listing over ingestion jobs.
#[derive(Clone)]
pub struct JobQueryService<J>
where
    J: JobRepository,
{
    jobs: Arc<J>,
}

impl<J> JobQueryService<J>
where
    J: JobRepository,
{
    /// Creates a job query service.
    #[must_use]
    pub const fn new(jobs: Arc<J>) -> Self {
        Self { jobs }
    }

    /// Lists one user's jobs, newest status change first, paginated.
    ///
    /// The count and the page are computed from the same query value, so
    /// `total_items` cannot drift from the returned slice.
    ///
    /// # Errors
    ///
    /// Returns [`JobQueryError::Repository`] when a read fails; no partial
    /// page is returned.
    pub async fn list_jobs(
        &self,
        filter: JobListFilter,
        user_id: &UserId,
    ) -> Result<Page<IngestJob>, JobQueryError> {
        let status = match filter.status {
            JobStatusFilter::All => None,
            JobStatusFilter::Only(status) => Some(status),
        };
        let query = JobQuery {
            user_id: user_id.clone(),
            status,
        };
        let total_items = self.jobs.count(&query).await?;
        let items = self
            .jobs
            .find_page(&query, filter.page.offset(), filter.page.limit())
            .await?;
        Ok(Page::assemble(items, filter.page, total_items))
    }
}
