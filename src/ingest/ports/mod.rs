//! Port contracts for ingestion.
//!
//! Ports define infrastructure-agnostic interfaces used by the pipeline and
//! the job query service: job persistence, upload staging, and spreadsheet
//! decoding.

pub mod decoder;
pub mod repository;
pub mod staging;

pub use decoder::{DecodeError, RowStream, SheetDecoder};
pub use repository::{JobQuery, JobRepository, JobRepositoryError, JobRepositoryResult};
pub use staging::{Staging, StagingError};
