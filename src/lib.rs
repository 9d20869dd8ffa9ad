//! Gantry: spreadsheet-to-todo ingestion with job lifecycle tracking.
//!
//! This crate ingests user-uploaded spreadsheets, converts each data row into
//! a persisted todo record, and tracks every ingestion attempt as a job with
//! an observable status. The read side provides searching, filtering, and
//! pagination over both todos and jobs.
//!
//! # Architecture
//!
//! Gantry follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (spreadsheet decoding,
//!   filesystem staging, in-memory stores)
//!
//! # Modules
//!
//! - [`identity`]: Opaque user identifiers and display-name lookup
//! - [`ingest`]: The ingestion pipeline and job lifecycle tracking
//! - [`paging`]: Shared pagination primitives
//! - [`todo`]: Todo records, soft deletion, and the todo query surface

pub mod identity;
pub mod ingest;
pub mod paging;
pub mod todo;
