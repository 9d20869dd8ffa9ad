//! Port contract for user directory lookup.

use crate::identity::domain::{UserId, UserProfile};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user directory operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// Read-only lookup of user profiles by identifier.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds the profile for a user.
    ///
    /// Returns `None` when the directory has no record of the user.
    async fn find_profile(&self, user_id: &UserId) -> UserDirectoryResult<Option<UserProfile>>;
}

/// Errors returned by user directory implementations.
#[derive(Debug, Clone, Error)]
pub enum UserDirectoryError {
    /// Directory backend failure.
    #[error("directory error: {0}")]
    Lookup(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserDirectoryError {
    /// Wraps a backend lookup error.
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Arc::new(err))
    }
}
