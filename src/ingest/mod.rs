//! Spreadsheet ingestion and job lifecycle tracking.
//!
//! One ingestion attempt is a job: created `PENDING`, advanced to
//! `IN_PROGRESS` once the spreadsheet decodes, and finished `SUCCESS` or
//! `FAILED`. Rows persist one at a time, in file order, and the first failing
//! row aborts the remainder while keeping everything persisted so far
//! (partial commit, no rollback). The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
