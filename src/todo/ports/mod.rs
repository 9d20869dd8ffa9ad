//! Port contracts for todo persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by todo services.

pub mod repository;

pub use repository::{TodoQuery, TodoRepository, TodoRepositoryError, TodoRepositoryResult};
