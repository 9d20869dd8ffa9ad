//! Service layer for todo listing, search, and maintenance.
//!
//! This is the read side of the ingestion pipeline: everything the pipeline
//! persists is surfaced here, under the same soft-delete and ownership
//! invariants. Repository failures surface as typed errors with no partial
//! results and no retries.

use crate::identity::{UserDirectory, UserDirectoryError, UserId};
use crate::paging::{Page, PageRequest};
use crate::todo::{
    domain::{Todo, TodoDomainError, TodoDraft, TodoId, TodoPatch},
    ports::{TodoQuery, TodoRepository, TodoRepositoryError},
};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Filter for the global todo listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListFilter {
    /// Substring the task text must contain; an empty string matches all.
    pub task_contains: String,
    /// Constrains the completion flag only when set.
    pub completed: Option<bool>,
    /// Page to fetch.
    pub page: PageRequest,
}

/// A todo enriched with its owner's display name.
///
/// The display name is derived from the user directory at read time; it is
/// never stored on the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedTodo {
    /// The todo record.
    pub todo: Todo,
    /// Display name of the owning user, when the directory knows them.
    pub owner_name: Option<String>,
}

/// Service-level errors for todo operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
    /// User directory lookup failed.
    #[error(transparent)]
    Directory(#[from] UserDirectoryError),
    /// The requested todo does not exist.
    #[error("todo not found: {0}")]
    TodoNotFound(TodoId),
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Todo query and maintenance service.
#[derive(Clone)]
pub struct TodoService<R, U, C>
where
    R: TodoRepository,
    U: UserDirectory,
    C: Clock + Send + Sync,
{
    todos: Arc<R>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<R, U, C> TodoService<R, U, C>
where
    R: TodoRepository,
    U: UserDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new todo service.
    #[must_use]
    pub const fn new(todos: Arc<R>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            todos,
            users,
            clock,
        }
    }

    /// Lists todos across all users, filtered and paginated, each enriched
    /// with the owner's display name.
    ///
    /// Soft-deleted records are excluded by the repository contract for any
    /// filter combination.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] or
    /// [`TodoServiceError::Directory`] when a collaborator call fails; no
    /// partial page is returned.
    pub async fn list_todos(&self, filter: &TodoListFilter) -> TodoServiceResult<Page<OwnedTodo>> {
        let query = TodoQuery {
            user_id: None,
            task_contains: Some(filter.task_contains.clone()),
            completed: filter.completed,
        };
        let total_items = self.todos.count(&query).await?;
        let todos = self
            .todos
            .find_page(&query, filter.page.offset(), filter.page.limit())
            .await?;

        let mut items = Vec::with_capacity(todos.len());
        for todo in todos {
            let owner_name = self
                .users
                .find_profile(todo.user_id())
                .await?
                .map(|profile| profile.display_name());
            items.push(OwnedTodo { todo, owner_name });
        }
        Ok(Page::assemble(items, filter.page, total_items))
    }

    /// Lists one user's todos, newest first, paginated.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the listing read fails.
    pub async fn list_todos_for_user(
        &self,
        page: PageRequest,
        user_id: &UserId,
    ) -> TodoServiceResult<Page<Todo>> {
        let query = TodoQuery {
            user_id: Some(user_id.clone()),
            task_contains: None,
            completed: None,
        };
        let total_items = self.todos.count(&query).await?;
        let items = self
            .todos
            .find_page(&query, page.offset(), page.limit())
            .await?;
        Ok(Page::assemble(items, page, total_items))
    }

    /// Creates a single todo from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when persistence fails.
    pub async fn create_todo(&self, draft: TodoDraft) -> TodoServiceResult<Todo> {
        let todo = Todo::new(draft, &*self.clock);
        self.todos.create(&todo).await?;
        Ok(todo)
    }

    /// Applies a partial patch to an existing todo.
    ///
    /// Only set patch fields replace stored values; unset fields keep the
    /// stored record's values.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::TodoNotFound`] when the todo does not
    /// exist and [`TodoServiceError::Domain`] when the patch fails
    /// validation.
    pub async fn update_todo(&self, id: TodoId, patch: &TodoPatch) -> TodoServiceResult<Todo> {
        let mut todo = self
            .todos
            .find_by_id(id)
            .await?
            .ok_or(TodoServiceError::TodoNotFound(id))?;
        todo.apply_patch(patch, &*self.clock)?;
        self.todos.update(&todo).await?;
        Ok(todo)
    }

    /// Soft-deletes the given todos, returning the number of records
    /// matched.
    ///
    /// Idempotent: already-deleted records stay deleted and still count as
    /// matched. Records are flagged, never physically removed.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the bulk update fails.
    pub async fn remove_todos(&self, ids: &[TodoId]) -> TodoServiceResult<u64> {
        let matched = self.todos.soft_delete_many(ids, self.clock.utc()).await?;
        Ok(matched)
    }
}
