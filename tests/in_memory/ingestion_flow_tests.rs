//! End-to-end ingestion tests: staged file through to queryable todos.

use std::io::Write as _;
use std::sync::Arc;

use gantry::identity::{UserId, adapters::InMemoryUserDirectory};
use gantry::ingest::{
    adapters::{
        FsStaging,
        memory::{InMemoryJobRepository, InMemorySheetDecoder},
    },
    domain::{CellValue, JobStatus, STATUS_HEADER, SheetRow, TASK_NAME_HEADER},
    services::{IngestFailure, IngestPipeline, JobListFilter, JobQueryService},
};
use gantry::paging::PageRequest;
use gantry::todo::{adapters::memory::InMemoryTodoRepository, services::TodoService};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

struct Harness {
    jobs: Arc<InMemoryJobRepository>,
    todos: Arc<InMemoryTodoRepository>,
    staging_dir: tempfile::TempDir,
}

#[fixture]
fn harness() -> Harness {
    Harness {
        jobs: Arc::new(InMemoryJobRepository::new()),
        todos: Arc::new(InMemoryTodoRepository::new()),
        staging_dir: tempfile::tempdir().expect("temp staging dir"),
    }
}

impl Harness {
    fn pipeline(
        &self,
        decoder: InMemorySheetDecoder,
    ) -> IngestPipeline<
        InMemoryJobRepository,
        InMemoryTodoRepository,
        InMemorySheetDecoder,
        FsStaging,
        DefaultClock,
    > {
        IngestPipeline::new(
            Arc::clone(&self.jobs),
            Arc::clone(&self.todos),
            Arc::new(decoder),
            Arc::new(FsStaging::new()),
            Arc::new(DefaultClock),
        )
    }

    fn stage_file(&self, name: &str) -> std::path::PathBuf {
        let path = self.staging_dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("staged file created");
        file.write_all(b"workbook bytes").expect("staged file written");
        path
    }

    fn todo_service(&self) -> TodoService<InMemoryTodoRepository, InMemoryUserDirectory, DefaultClock> {
        TodoService::new(
            Arc::clone(&self.todos),
            Arc::new(InMemoryUserDirectory::new()),
            Arc::new(DefaultClock),
        )
    }
}

fn owner() -> UserId {
    UserId::new("user-1").expect("valid user id")
}

fn data_row(index: usize, task: &str, completed: bool) -> SheetRow {
    SheetRow::new(
        index,
        [
            (TASK_NAME_HEADER.to_owned(), CellValue::Text(task.to_owned())),
            (STATUS_HEADER.to_owned(), CellValue::Bool(completed)),
        ],
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn uploaded_rows_become_queryable_todos(harness: Harness) {
    let path = harness.stage_file("todos.xlsx");
    let decoder = InMemorySheetDecoder::with_rows(vec![
        data_row(1, "Water plants", true),
        data_row(2, "Buy milk", false),
        data_row(3, "File taxes", true),
    ]);

    let report = harness
        .pipeline(decoder)
        .ingest(&path, &owner())
        .await
        .expect("ingestion completes");

    assert_eq!(report.status, JobStatus::Success);
    assert_eq!(report.rows_ingested, 3);
    assert_eq!(report.file_name, "todos.xlsx");

    let page = harness
        .todo_service()
        .list_todos_for_user(PageRequest::new(1, 10), &owner())
        .await
        .expect("listing succeeds");
    assert_eq!(page.total_items, 3);
    let tasks: Vec<&str> = page.items.iter().map(|todo| todo.task()).collect();
    // Newest first: last ingested row lists first.
    assert_eq!(tasks, ["File taxes", "Buy milk", "Water plants"]);
    let completed: Vec<bool> = page.items.iter().map(|todo| todo.is_completed()).collect();
    assert_eq!(completed, [true, false, true]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn finished_job_is_visible_in_the_job_listing(harness: Harness) {
    let path = harness.stage_file("todos.xlsx");
    let decoder = InMemorySheetDecoder::with_rows(vec![data_row(1, "Water plants", false)]);

    let report = harness
        .pipeline(decoder)
        .ingest(&path, &owner())
        .await
        .expect("ingestion completes");

    let jobs = JobQueryService::new(Arc::clone(&harness.jobs));
    let page = jobs
        .list_jobs(JobListFilter::default(), &owner())
        .await
        .expect("job listing succeeds");

    assert_eq!(page.total_items, 1);
    let listed = page.items.first().expect("one job listed");
    assert_eq!(listed.id(), report.job_id);
    assert_eq!(listed.status(), JobStatus::Success);
    assert_eq!(listed.file_name(), "todos.xlsx");
    assert_eq!(listed.user_id(), &owner());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_upload_leaves_a_failed_job_and_no_todos(harness: Harness) {
    let path = harness.stage_file("garbage.xlsx");
    let decoder = InMemorySheetDecoder::failing("workbook is corrupt");

    let report = harness
        .pipeline(decoder)
        .ingest(&path, &owner())
        .await
        .expect("pipeline returns a report");

    assert_eq!(report.status, JobStatus::Failed);
    assert!(matches!(report.failure, Some(IngestFailure::Decode(_))));

    let jobs = JobQueryService::new(Arc::clone(&harness.jobs));
    let filter = JobListFilter {
        status: JobStatus::Failed.into(),
        page: PageRequest::new(1, 10),
    };
    let page = jobs
        .list_jobs(filter, &owner())
        .await
        .expect("job listing succeeds");
    assert_eq!(page.total_items, 1);

    let todos = harness
        .todo_service()
        .list_todos_for_user(PageRequest::new(1, 10), &owner())
        .await
        .expect("listing succeeds");
    assert_eq!(todos.total_items, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_staged_file_reports_an_error_without_a_job(harness: Harness) {
    let path = harness.staging_dir.path().join("never-uploaded.xlsx");
    let decoder = InMemorySheetDecoder::with_rows(Vec::new());

    let result = harness.pipeline(decoder).ingest(&path, &owner()).await;

    assert!(result.is_err());
    let jobs = JobQueryService::new(Arc::clone(&harness.jobs));
    let page = jobs
        .list_jobs(JobListFilter::default(), &owner())
        .await
        .expect("job listing succeeds");
    assert_eq!(page.total_items, 0);
}
