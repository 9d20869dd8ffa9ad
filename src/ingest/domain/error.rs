//! Error types for ingest domain validation and parsing.

use super::{JobId, JobStatus};
use thiserror::Error;

/// Errors returned while mutating ingest domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IngestDomainError {
    /// A job status transition outside the legal edges was requested.
    ///
    /// Never fires under correct pipeline use; when it does, the triggering
    /// request is a logic fault and is fatal to that request.
    #[error("illegal status transition for job {job_id}: {from} -> {to}")]
    IllegalTransition {
        /// Job whose status was left unchanged.
        job_id: JobId,
        /// Status the job currently holds.
        from: JobStatus,
        /// Status that was requested.
        to: JobStatus,
    },
}

/// Error returned while parsing job statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown job status: {0}")]
pub struct ParseJobStatusError(pub String);

/// Errors returned while mapping a spreadsheet row to a todo draft.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RowError {
    /// The required "Todo Name" cell is absent or empty.
    #[error("row {row}: missing required \"Todo Name\" cell")]
    MissingTaskName {
        /// 1-based data-row ordinal (the header row is not counted).
        row: usize,
    },
}
