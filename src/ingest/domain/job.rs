//! Ingestion job aggregate and its status state machine.

use super::{IngestDomainError, JobId, ParseJobStatusError};
use crate::identity::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Job lifecycle status.
///
/// The canonical storage strings (`PENDING`, `IN_PROGRESS`, `SUCCESS`,
/// `FAILED`) are a stable contract with existing stored jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    /// The job record exists but decoding has not finished.
    Pending,
    /// Rows are being persisted.
    InProgress,
    /// Every row persisted.
    Success,
    /// Decoding failed or a row failed to persist.
    Failed,
}

impl JobStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
        }
    }

    /// Returns whether the transition `self -> to` is a legal edge.
    ///
    /// Transitions are monotonic and one-directional:
    /// `PENDING -> IN_PROGRESS -> {SUCCESS | FAILED}`, plus
    /// `PENDING -> FAILED` for decode failures that occur before the row
    /// loop starts. Terminal states admit no edge, including self-edges.
    #[must_use]
    pub const fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Pending, Self::InProgress | Self::Failed)
                | (Self::InProgress, Self::Success | Self::Failed)
        )
    }

    /// Returns whether this status admits no further transition.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for JobStatus {
    type Error = ParseJobStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "PENDING" => Ok(Self::Pending),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "SUCCESS" => Ok(Self::Success),
            "FAILED" => Ok(Self::Failed),
            _ => Err(ParseJobStatusError(value.to_owned())),
        }
    }
}

/// Metadata of a staged upload, as reported by the staging collaborator.
///
/// The path is transient: it is only guaranteed readable while the pipeline
/// runs, and the caller removes the file afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    /// Base name of the uploaded file.
    pub file_name: String,
    /// Staging location of the file.
    pub file_path: String,
    /// Size of the staged file in bytes.
    pub file_size: u64,
}

/// Ingestion job aggregate root.
///
/// Serialised field names (`fileName`, `filePath`, `fileSize`, `userId`,
/// `uploadedAt`) are a stable storage contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestJob {
    id: JobId,
    file_name: String,
    file_path: String,
    file_size: u64,
    status: JobStatus,
    user_id: UserId,
    uploaded_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted job aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedJobData {
    /// Persisted job identifier.
    pub id: JobId,
    /// Persisted file name.
    pub file_name: String,
    /// Persisted staging path.
    pub file_path: String,
    /// Persisted file size in bytes.
    pub file_size: u64,
    /// Persisted lifecycle status.
    pub status: JobStatus,
    /// Persisted owning user.
    pub user_id: UserId,
    /// Persisted last-status-change timestamp.
    pub uploaded_at: DateTime<Utc>,
}

impl IngestJob {
    /// Creates a new `PENDING` job for a staged file.
    #[must_use]
    pub fn new(staged: &StagedFile, user_id: UserId, clock: &impl Clock) -> Self {
        Self {
            id: JobId::new(),
            file_name: staged.file_name.clone(),
            file_path: staged.file_path.clone(),
            file_size: staged.file_size,
            status: JobStatus::Pending,
            user_id,
            uploaded_at: clock.utc(),
        }
    }

    /// Reconstructs a job from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedJobData) -> Self {
        Self {
            id: data.id,
            file_name: data.file_name,
            file_path: data.file_path,
            file_size: data.file_size,
            status: data.status,
            user_id: data.user_id,
            uploaded_at: data.uploaded_at,
        }
    }

    /// Returns the job identifier.
    #[must_use]
    pub const fn id(&self) -> JobId {
        self.id
    }

    /// Returns the uploaded file's base name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the transient staging path.
    #[must_use]
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Returns the staged file's size in bytes.
    #[must_use]
    pub const fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Returns the job lifecycle status.
    #[must_use]
    pub const fn status(&self) -> JobStatus {
        self.status
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the last-status-change timestamp.
    #[must_use]
    pub const fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }

    /// Moves the job to a new status, touching `uploaded_at`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestDomainError::IllegalTransition`] for any edge outside
    /// the state machine; the job is left unchanged in that case.
    pub fn transition_to(
        &mut self,
        to: JobStatus,
        clock: &impl Clock,
    ) -> Result<(), IngestDomainError> {
        if !self.status.can_transition_to(to) {
            return Err(IngestDomainError::IllegalTransition {
                job_id: self.id,
                from: self.status,
                to,
            });
        }
        self.status = to;
        self.uploaded_at = clock.utc();
        Ok(())
    }
}
