//! Application services for ingestion orchestration and job queries.

mod jobs;
mod pipeline;

pub use jobs::{JobListFilter, JobQueryError, JobQueryService, JobStatusFilter};
pub use pipeline::{IngestError, IngestFailure, IngestPipeline, IngestReport, StatusTracker};
