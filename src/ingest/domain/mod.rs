//! Domain model for ingestion jobs and spreadsheet rows.
//!
//! The ingest domain models the job status state machine, the job aggregate,
//! and the pure row-to-draft mapping, keeping all decoding and persistence
//! concerns outside of the domain boundary.

mod error;
mod ids;
mod job;
mod row;

pub use error::{IngestDomainError, ParseJobStatusError, RowError};
pub use ids::JobId;
pub use job::{IngestJob, JobStatus, PersistedJobData, StagedFile};
pub use row::{CellValue, STATUS_HEADER, SheetRow, TASK_NAME_HEADER, map_row};
