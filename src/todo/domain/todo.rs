//! Todo aggregate root and related value types.

use super::{TodoDomainError, TodoId};
use crate::identity::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated candidate for a new todo record.
///
/// A draft is produced either by direct caller input or by the ingestion row
/// mapper; in both cases validation happens here, before anything reaches a
/// repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    task: String,
    is_completed: bool,
    user_id: UserId,
}

impl TodoDraft {
    /// Creates a validated draft.
    ///
    /// The task text is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTaskText`] when the task text is empty
    /// or whitespace only.
    pub fn new(
        task: impl Into<String>,
        is_completed: bool,
        user_id: UserId,
    ) -> Result<Self, TodoDomainError> {
        let task = validated_task_text(task.into())?;
        Ok(Self {
            task,
            is_completed,
            user_id,
        })
    }

    /// Returns the task text.
    #[must_use]
    pub fn task(&self) -> &str {
        &self.task
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

/// Explicit partial patch for an existing todo.
///
/// Only set fields are applied; unset fields keep the stored value. This
/// replaces per-field "use provided value, else keep existing" fallbacks with
/// a single explicit merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TodoPatch {
    /// Replacement task text, when set.
    pub task: Option<String>,
    /// Replacement completion flag, when set.
    pub is_completed: Option<bool>,
}

impl TodoPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement task text.
    #[must_use]
    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }

    /// Sets the replacement completion flag.
    #[must_use]
    pub const fn with_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = Some(is_completed);
        self
    }
}

/// Todo aggregate root.
///
/// Field names in the serialised form (`isCompleted`, `userId`, `isDeleted`,
/// `createdAt`, `updatedAt`) are a stable storage contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    id: TodoId,
    task: String,
    is_completed: bool,
    user_id: UserId,
    is_deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted todo identifier.
    pub id: TodoId,
    /// Persisted task text.
    pub task: String,
    /// Persisted completion flag.
    pub is_completed: bool,
    /// Persisted owning user.
    pub user_id: UserId,
    /// Persisted soft-delete flag.
    pub is_deleted: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new todo from a validated draft.
    #[must_use]
    pub fn new(draft: TodoDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TodoId::new(),
            task: draft.task,
            is_completed: draft.is_completed,
            user_id: draft.user_id,
            is_deleted: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            task: data.task,
            is_completed: data.is_completed,
            user_id: data.user_id,
            is_deleted: data.is_deleted,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the task text.
    #[must_use]
    pub fn task(&self) -> &str {
        &self.task
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the owning user. Set at creation, never changed.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the soft-delete flag.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Merges a partial patch into this record and touches `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTaskText`] when the patch carries an
    /// empty task text; the stored record is left unchanged in that case.
    pub fn apply_patch(
        &mut self,
        patch: &TodoPatch,
        clock: &impl Clock,
    ) -> Result<(), TodoDomainError> {
        let task = match &patch.task {
            Some(text) => Some(validated_task_text(text.clone())?),
            None => None,
        };
        if let Some(text) = task {
            self.task = text;
        }
        if let Some(is_completed) = patch.is_completed {
            self.is_completed = is_completed;
        }
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Marks this record as deleted.
    ///
    /// Idempotent: deleting an already-deleted record leaves the flag set and
    /// does not error. The record is never physically removed.
    pub fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.is_deleted = true;
        self.updated_at = at;
    }
}

/// Trims task text, rejecting empty results.
fn validated_task_text(raw: String) -> Result<String, TodoDomainError> {
    let normalized = raw.trim();
    if normalized.is_empty() {
        return Err(TodoDomainError::EmptyTaskText);
    }
    Ok(normalized.to_owned())
}
