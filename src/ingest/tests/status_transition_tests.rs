//! Unit tests for job status transition validation.

use crate::identity::UserId;
use crate::ingest::domain::{IngestDomainError, IngestJob, JobStatus, StagedFile};
use eyre::{bail, ensure};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

const ALL_STATUSES: [JobStatus; 4] = [
    JobStatus::Pending,
    JobStatus::InProgress,
    JobStatus::Success,
    JobStatus::Failed,
];

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[fixture]
fn pending_job(clock: DefaultClock) -> IngestJob {
    let staged = StagedFile {
        file_name: "todos.xlsx".to_owned(),
        file_path: "/tmp/staged/todos.xlsx".to_owned(),
        file_size: 512,
    };
    let user_id = UserId::new("user-1").expect("valid user id");
    IngestJob::new(&staged, user_id, &clock)
}

#[rstest]
#[case(JobStatus::Pending, JobStatus::Pending, false)]
#[case(JobStatus::Pending, JobStatus::InProgress, true)]
#[case(JobStatus::Pending, JobStatus::Success, false)]
#[case(JobStatus::Pending, JobStatus::Failed, true)]
#[case(JobStatus::InProgress, JobStatus::Pending, false)]
#[case(JobStatus::InProgress, JobStatus::InProgress, false)]
#[case(JobStatus::InProgress, JobStatus::Success, true)]
#[case(JobStatus::InProgress, JobStatus::Failed, true)]
#[case(JobStatus::Success, JobStatus::Pending, false)]
#[case(JobStatus::Success, JobStatus::InProgress, false)]
#[case(JobStatus::Success, JobStatus::Success, false)]
#[case(JobStatus::Success, JobStatus::Failed, false)]
#[case(JobStatus::Failed, JobStatus::Pending, false)]
#[case(JobStatus::Failed, JobStatus::InProgress, false)]
#[case(JobStatus::Failed, JobStatus::Success, false)]
#[case(JobStatus::Failed, JobStatus::Failed, false)]
fn can_transition_to_returns_expected(
    #[case] from: JobStatus,
    #[case] to: JobStatus,
    #[case] expected: bool,
) {
    assert_eq!(from.can_transition_to(to), expected);
}

#[rstest]
#[case(JobStatus::Pending, false)]
#[case(JobStatus::InProgress, false)]
#[case(JobStatus::Success, true)]
#[case(JobStatus::Failed, true)]
fn is_terminal_returns_expected(#[case] status: JobStatus, #[case] expected: bool) {
    assert_eq!(status.is_terminal(), expected);
}

#[rstest]
#[case(JobStatus::Pending, "PENDING")]
#[case(JobStatus::InProgress, "IN_PROGRESS")]
#[case(JobStatus::Success, "SUCCESS")]
#[case(JobStatus::Failed, "FAILED")]
fn storage_strings_round_trip(#[case] status: JobStatus, #[case] text: &str) -> eyre::Result<()> {
    ensure!(status.as_str() == text);
    ensure!(JobStatus::try_from(text) == Ok(status));
    ensure!(serde_json::to_value(status)? == serde_json::json!(text));
    Ok(())
}

#[rstest]
fn new_job_starts_pending(pending_job: IngestJob) {
    assert_eq!(pending_job.status(), JobStatus::Pending);
    assert_eq!(pending_job.file_name(), "todos.xlsx");
    assert_eq!(pending_job.file_size(), 512);
}

#[rstest]
fn transition_touches_uploaded_at(clock: DefaultClock, mut pending_job: IngestJob) -> eyre::Result<()> {
    let original = pending_job.uploaded_at();

    pending_job.transition_to(JobStatus::InProgress, &clock)?;

    ensure!(pending_job.status() == JobStatus::InProgress);
    ensure!(pending_job.uploaded_at() >= original);
    Ok(())
}

#[rstest]
fn illegal_transition_leaves_job_unchanged(
    clock: DefaultClock,
    mut pending_job: IngestJob,
) -> eyre::Result<()> {
    let job_id = pending_job.id();
    let original_uploaded_at = pending_job.uploaded_at();

    let result = pending_job.transition_to(JobStatus::Success, &clock);
    let expected = Err(IngestDomainError::IllegalTransition {
        job_id,
        from: JobStatus::Pending,
        to: JobStatus::Success,
    });

    if result != expected {
        bail!("expected {expected:?}, got {result:?}");
    }
    ensure!(pending_job.status() == JobStatus::Pending);
    ensure!(pending_job.uploaded_at() == original_uploaded_at);
    Ok(())
}

#[rstest]
#[case(JobStatus::Success)]
#[case(JobStatus::Failed)]
fn terminal_status_rejects_all_transitions(
    #[case] terminal: JobStatus,
    clock: DefaultClock,
    mut pending_job: IngestJob,
) -> eyre::Result<()> {
    if terminal == JobStatus::Success {
        pending_job.transition_to(JobStatus::InProgress, &clock)?;
        pending_job.transition_to(JobStatus::Success, &clock)?;
    } else {
        pending_job.transition_to(JobStatus::Failed, &clock)?;
    }

    let job_id = pending_job.id();
    for target in ALL_STATUSES {
        let result = pending_job.transition_to(target, &clock);
        let expected = Err(IngestDomainError::IllegalTransition {
            job_id,
            from: terminal,
            to: target,
        });
        if result != expected {
            bail!("expected {expected:?}, got {result:?}");
        }
        ensure!(pending_job.status() == terminal);
    }
    Ok(())
}
