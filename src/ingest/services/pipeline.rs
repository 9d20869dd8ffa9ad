//! The ingestion pipeline and job status tracking.
//!
//! `IngestPipeline::ingest` is the single entry point for processing a
//! staged spreadsheet: it creates the job record, decodes rows, persists
//! them one at a time in file order, and drives the job status machine to a
//! terminal state. Rows persisted before a failure stay persisted; nothing
//! is rolled back and no retry happens here.

use crate::identity::UserId;
use crate::ingest::{
    domain::{IngestDomainError, IngestJob, JobId, JobStatus, SheetRow, map_row},
    ports::{JobRepository, JobRepositoryError, SheetDecoder, Staging, StagingError},
};
use crate::todo::{domain::Todo, ports::TodoRepository};
use mockable::Clock;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Drives a job through its status state machine and persists each step.
pub struct StatusTracker<J, C>
where
    J: JobRepository,
    C: Clock + Send + Sync,
{
    jobs: Arc<J>,
    clock: Arc<C>,
}

impl<J, C> StatusTracker<J, C>
where
    J: JobRepository,
    C: Clock + Send + Sync,
{
    /// Creates a status tracker over a job repository.
    #[must_use]
    pub const fn new(jobs: Arc<J>, clock: Arc<C>) -> Self {
        Self { jobs, clock }
    }

    /// Moves the job to `to` and persists the change.
    ///
    /// The domain state machine validates the edge first; an illegal edge is
    /// a pipeline logic fault and fails the request without mutating the
    /// job. A repository failure while persisting a *legal* transition is
    /// logged and swallowed: the in-memory status stands, the stored status
    /// may lag, and callers should treat the job's stored status as unknown
    /// (assume `FAILED`) until it is next written.
    ///
    /// # Errors
    ///
    /// Returns [`IngestDomainError::IllegalTransition`] for edges outside
    /// the state machine.
    pub async fn advance(
        &self,
        job: &mut IngestJob,
        to: JobStatus,
    ) -> Result<(), IngestDomainError> {
        job.transition_to(to, &*self.clock)?;
        if let Err(err) = self.jobs.update(job).await {
            tracing::warn!(
                job_id = %job.id(),
                status = %to,
                error = %err,
                "job status transition not persisted; stored status may lag"
            );
        }
        Ok(())
    }
}

/// Why an ingestion finished `FAILED`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IngestFailure {
    /// The spreadsheet could not be decoded; no rows were attempted.
    #[error("decode failed: {0}")]
    Decode(String),

    /// A row failed to map or persist; later rows were not attempted.
    #[error("row {index} failed: {message}")]
    Row {
        /// 1-based data-row ordinal of the failing row.
        index: usize,
        /// Message of the triggering error.
        message: String,
    },
}

/// Outcome of one ingestion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    /// Identifier of the job that tracked this attempt.
    pub job_id: JobId,
    /// Base name of the ingested file.
    pub file_name: String,
    /// Final job status.
    pub status: JobStatus,
    /// Number of rows persisted before the pipeline stopped.
    pub rows_ingested: usize,
    /// Failure detail when `status` is `FAILED`.
    pub failure: Option<IngestFailure>,
}

impl IngestReport {
    fn finished(job: &IngestJob, rows_ingested: usize, failure: Option<IngestFailure>) -> Self {
        Self {
            job_id: job.id(),
            file_name: job.file_name().to_owned(),
            status: job.status(),
            rows_ingested,
            failure,
        }
    }
}

/// Errors that abort an ingestion before it can report a job outcome.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The staged file was unreadable; no job record was created.
    #[error(transparent)]
    Staging(#[from] StagingError),

    /// The job record could not be created or looked up.
    #[error(transparent)]
    Repository(#[from] JobRepositoryError),

    /// The pipeline requested an illegal status transition. Indicates a
    /// pipeline logic fault; fatal to this request.
    #[error(transparent)]
    Domain(#[from] IngestDomainError),
}

/// Orchestrates spreadsheet ingestion end to end.
///
/// Single logical flow: no parallelism across rows or jobs, and no
/// cancellation or timeout of its own. Two pipelines running concurrently
/// for the same user may interleave rows in storage; within one invocation
/// rows persist in spreadsheet order.
pub struct IngestPipeline<J, T, D, S, C>
where
    J: JobRepository,
    T: TodoRepository,
    D: SheetDecoder,
    S: Staging,
    C: Clock + Send + Sync,
{
    jobs: Arc<J>,
    todos: Arc<T>,
    decoder: Arc<D>,
    staging: Arc<S>,
    clock: Arc<C>,
    tracker: StatusTracker<J, C>,
}

impl<J, T, D, S, C> IngestPipeline<J, T, D, S, C>
where
    J: JobRepository,
    T: TodoRepository,
    D: SheetDecoder,
    S: Staging,
    C: Clock + Send + Sync,
{
    /// Creates a pipeline over the given collaborators.
    #[must_use]
    pub fn new(
        jobs: Arc<J>,
        todos: Arc<T>,
        decoder: Arc<D>,
        staging: Arc<S>,
        clock: Arc<C>,
    ) -> Self {
        let tracker = StatusTracker::new(Arc::clone(&jobs), Arc::clone(&clock));
        Self {
            jobs,
            todos,
            decoder,
            staging,
            clock,
            tracker,
        }
    }

    /// Ingests the staged spreadsheet at `path` on behalf of `user_id`.
    ///
    /// Creates a `PENDING` job, decodes the first worksheet, advances the
    /// job to `IN_PROGRESS`, persists each row in file order, and finishes
    /// the job `SUCCESS` or `FAILED`. The first failing row stops the loop;
    /// rows persisted before it stay persisted. The staged file is expected
    /// to be removed by the caller after this returns, success or failure.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Staging`] when the file is unreadable (no job
    /// record is created) and [`IngestError::Repository`] when the job
    /// record cannot be created. Decode and row failures are not `Err`: they
    /// finish the job `FAILED` and report the reason in the returned
    /// [`IngestReport`].
    pub async fn ingest(
        &self,
        path: &Path,
        user_id: &UserId,
    ) -> Result<IngestReport, IngestError> {
        let staged = self.staging.stat(path)?;
        let mut job = IngestJob::new(&staged, user_id.clone(), &*self.clock);
        self.jobs.create(&job).await?;
        tracing::info!(
            job_id = %job.id(),
            file = %job.file_name(),
            size = job.file_size(),
            "ingest job created"
        );

        let rows = match self.decoder.decode(path) {
            Ok(rows) => rows,
            Err(err) => {
                tracing::error!(job_id = %job.id(), error = %err, "spreadsheet decode failed");
                self.tracker.advance(&mut job, JobStatus::Failed).await?;
                return Ok(IngestReport::finished(
                    &job,
                    0,
                    Some(IngestFailure::Decode(err.to_string())),
                ));
            }
        };

        self.tracker.advance(&mut job, JobStatus::InProgress).await?;

        let mut rows_ingested = 0usize;
        for row in rows {
            if let Err(message) = self.persist_row(&row, user_id).await {
                tracing::error!(
                    job_id = %job.id(),
                    row = row.index(),
                    error = %message,
                    "row persistence failed; aborting remaining rows"
                );
                self.tracker.advance(&mut job, JobStatus::Failed).await?;
                return Ok(IngestReport::finished(
                    &job,
                    rows_ingested,
                    Some(IngestFailure::Row {
                        index: row.index(),
                        message,
                    }),
                ));
            }
            rows_ingested += 1;
        }

        self.tracker.advance(&mut job, JobStatus::Success).await?;
        tracing::info!(job_id = %job.id(), rows = rows_ingested, "ingest job succeeded");
        Ok(IngestReport::finished(&job, rows_ingested, None))
    }

    /// Maps one row and persists the resulting todo.
    ///
    /// Both mapping and persistence failures collapse to the triggering
    /// error's message; the pipeline surfaces it as the job's failure reason
    /// without storing it structurally.
    async fn persist_row(&self, row: &SheetRow, user_id: &UserId) -> Result<(), String> {
        let draft = map_row(row, user_id).map_err(|err| err.to_string())?;
        let todo = Todo::new(draft, &*self.clock);
        self.todos
            .create(&todo)
            .await
            .map_err(|err| err.to_string())
    }
}
