//! Repository port for todo persistence, patching, and filtered listing.

use crate::identity::UserId;
use crate::todo::domain::{Todo, TodoId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Filter predicate shared by [`TodoRepository::find_page`] and
/// [`TodoRepository::count`].
///
/// Soft-deleted records are excluded from every read regardless of the
/// fields set here; that exclusion is part of the repository contract, not a
/// caller responsibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoQuery {
    /// Constrains results to one owner, when set.
    pub user_id: Option<UserId>,
    /// Substring match on the task text; `None` or an empty string matches
    /// all records.
    pub task_contains: Option<String>,
    /// Constrains the completion flag only when set.
    pub completed: Option<bool>,
}

/// Todo persistence contract.
///
/// Listing reads return records ordered by `created_at` descending (newest
/// first); records with equal timestamps order newest-inserted first.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Stores a new todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::DuplicateTodo`] when the identifier
    /// already exists.
    async fn create(&self, todo: &Todo) -> TodoRepositoryResult<()>;

    /// Persists changes to an existing todo (task text, completion flag,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the todo does not
    /// exist.
    async fn update(&self, todo: &Todo) -> TodoRepositoryResult<()>;

    /// Finds a todo by identifier, including soft-deleted records.
    ///
    /// Returns `None` when the todo does not exist.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Flags the given todos as deleted and stamps their `updated_at`.
    ///
    /// Idempotent: already-deleted records stay deleted. Unknown identifiers
    /// are skipped rather than reported as errors. Returns the number of
    /// records matched.
    async fn soft_delete_many(
        &self,
        ids: &[TodoId],
        at: DateTime<Utc>,
    ) -> TodoRepositoryResult<u64>;

    /// Returns one page of non-deleted todos matching the query, newest
    /// first.
    async fn find_page(
        &self,
        query: &TodoQuery,
        offset: u64,
        limit: u64,
    ) -> TodoRepositoryResult<Vec<Todo>>;

    /// Counts non-deleted todos matching the query.
    async fn count(&self, query: &TodoQuery) -> TodoRepositoryResult<u64>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// A todo with the same identifier already exists.
    #[error("duplicate todo identifier: {0}")]
    DuplicateTodo(TodoId),

    /// The todo was not found.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
