//! Todo records and the todo query surface.
//!
//! A todo is a user-owned to-do item. Rows ingested from spreadsheets become
//! todos, and this module provides the read side over them: global search
//! with substring and completion filters, owner-scoped listing, and the
//! maintenance operations (create, partial update, soft delete). Deleted
//! todos are never physically removed; every read path excludes them
//! structurally. The module follows hexagonal architecture:
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
