//! In-memory todo repository for tests and embedding.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{Todo, TodoId},
    ports::{TodoQuery, TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Records are kept in insertion order so that equal `created_at` timestamps
/// resolve newest-inserted first in listing reads.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<Vec<Todo>>>,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Applies the query predicate to one record.
///
/// Soft-deleted records never match; this is the structural exclusion the
/// repository contract guarantees.
fn matches(query: &TodoQuery, todo: &Todo) -> bool {
    if todo.is_deleted() {
        return false;
    }
    if let Some(user_id) = &query.user_id {
        if todo.user_id() != user_id {
            return false;
        }
    }
    if let Some(fragment) = &query.task_contains {
        if !todo.task().contains(fragment.as_str()) {
            return false;
        }
    }
    if let Some(completed) = query.completed {
        if todo.is_completed() != completed {
            return false;
        }
    }
    true
}

/// Collects matching records, newest first.
fn matching_newest_first(records: &[Todo], query: &TodoQuery) -> Vec<Todo> {
    let mut matched: Vec<Todo> = records
        .iter()
        .rev()
        .filter(|todo| matches(query, todo))
        .cloned()
        .collect();
    // Stable sort: equal timestamps keep the reversed insertion order.
    matched.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    matched
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.iter().any(|existing| existing.id() == todo.id()) {
            return Err(TodoRepositoryError::DuplicateTodo(todo.id()));
        }
        state.push(todo.clone());
        Ok(())
    }

    async fn update(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let slot = state
            .iter_mut()
            .find(|existing| existing.id() == todo.id())
            .ok_or(TodoRepositoryError::NotFound(todo.id()))?;
        *slot = todo.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.iter().find(|todo| todo.id() == id).cloned())
    }

    async fn soft_delete_many(
        &self,
        ids: &[TodoId],
        at: DateTime<Utc>,
    ) -> TodoRepositoryResult<u64> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut matched = 0u64;
        for todo in state.iter_mut() {
            if ids.contains(&todo.id()) {
                todo.mark_deleted(at);
                matched += 1;
            }
        }
        Ok(matched)
    }

    async fn find_page(
        &self,
        query: &TodoQuery,
        offset: u64,
        limit: u64,
    ) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(matching_newest_first(&state, query)
            .into_iter()
            .skip(skip)
            .take(take)
            .collect())
    }

    async fn count(&self, query: &TodoQuery) -> TodoRepositoryResult<u64> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let matched = state.iter().filter(|todo| matches(query, todo)).count();
        Ok(u64::try_from(matched).unwrap_or(u64::MAX))
    }
}
