//! In-memory job repository for tests and embedding.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::ingest::{
    domain::IngestJob,
    ports::{JobQuery, JobRepository, JobRepositoryError, JobRepositoryResult},
};

/// Thread-safe in-memory job repository.
///
/// Records are kept in insertion order so that equal `uploaded_at`
/// timestamps resolve newest-inserted first in listing reads.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobRepository {
    state: Arc<RwLock<Vec<IngestJob>>>,
}

impl InMemoryJobRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Applies the query predicate to one record.
fn matches(query: &JobQuery, job: &IngestJob) -> bool {
    if job.user_id() != &query.user_id {
        return false;
    }
    match query.status {
        Some(status) => job.status() == status,
        None => true,
    }
}

/// Collects matching records, newest status change first.
fn matching_newest_first(records: &[IngestJob], query: &JobQuery) -> Vec<IngestJob> {
    let mut matched: Vec<IngestJob> = records
        .iter()
        .rev()
        .filter(|job| matches(query, job))
        .cloned()
        .collect();
    // Stable sort: equal timestamps keep the reversed insertion order.
    matched.sort_by(|a, b| b.uploaded_at().cmp(&a.uploaded_at()));
    matched
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn create(&self, job: &IngestJob) -> JobRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            JobRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.iter().any(|existing| existing.id() == job.id()) {
            return Err(JobRepositoryError::DuplicateJob(job.id()));
        }
        state.push(job.clone());
        Ok(())
    }

    async fn update(&self, job: &IngestJob) -> JobRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            JobRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let slot = state
            .iter_mut()
            .find(|existing| existing.id() == job.id())
            .ok_or(JobRepositoryError::NotFound(job.id()))?;
        *slot = job.clone();
        Ok(())
    }

    async fn find_page(
        &self,
        query: &JobQuery,
        offset: u64,
        limit: u64,
    ) -> JobRepositoryResult<Vec<IngestJob>> {
        let state = self.state.read().map_err(|err| {
            JobRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(matching_newest_first(&state, query)
            .into_iter()
            .skip(skip)
            .take(take)
            .collect())
    }

    async fn count(&self, query: &JobQuery) -> JobRepositoryResult<u64> {
        let state = self.state.read().map_err(|err| {
            JobRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let matched = state.iter().filter(|job| matches(query, job)).count();
        Ok(u64::try_from(matched).unwrap_or(u64::MAX))
    }
}
