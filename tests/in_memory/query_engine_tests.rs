//! Integration tests for the task query surface.

use std::sync::Arc;

use gantry::identity::{UserId, UserProfile, adapters::InMemoryUserDirectory};
use gantry::paging::PageRequest;
use gantry::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{TodoDraft, TodoPatch},
    services::{TodoListFilter, TodoService},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TodoService<InMemoryTodoRepository, InMemoryUserDirectory, DefaultClock>;

struct Harness {
    service: TestService,
    directory: InMemoryUserDirectory,
}

#[fixture]
fn harness() -> Harness {
    let directory = InMemoryUserDirectory::new();
    let service = TodoService::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(directory.clone()),
        Arc::new(DefaultClock),
    );
    Harness { service, directory }
}

fn owner(id: &str) -> UserId {
    UserId::new(id).expect("valid user id")
}

fn draft(task: &str, is_completed: bool, user: &str) -> TodoDraft {
    TodoDraft::new(task, is_completed, owner(user)).expect("valid draft")
}

async fn seed(service: &TestService, entries: &[(&str, bool, &str)]) {
    for (task, is_completed, user) in entries {
        service
            .create_todo(draft(task, *is_completed, user))
            .await
            .expect("create succeeds");
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn substring_and_completion_filters_combine(harness: Harness) {
    seed(
        &harness.service,
        &[
            ("Buy coffee beans", false, "user-1"),
            ("Grind coffee", true, "user-1"),
            ("Buy tea", false, "user-1"),
        ],
    )
    .await;

    let filter = TodoListFilter {
        task_contains: "coffee".to_owned(),
        completed: Some(true),
        page: PageRequest::new(1, 10),
    };
    let page = harness.service.list_todos(&filter).await.expect("listing succeeds");

    assert_eq!(page.total_items, 1);
    let tasks: Vec<&str> = page.items.iter().map(|item| item.todo.task()).collect();
    assert_eq!(tasks, ["Grind coffee"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_spans_all_users_with_owner_names(harness: Harness) {
    harness
        .directory
        .upsert(owner("user-1"), UserProfile::new("Grace", "Hopper"))
        .expect("directory upsert succeeds");
    seed(
        &harness.service,
        &[("hers", false, "user-1"), ("theirs", false, "user-2")],
    )
    .await;

    let page = harness
        .service
        .list_todos(&TodoListFilter::default())
        .await
        .expect("listing succeeds");

    assert_eq!(page.total_items, 2);
    let names: Vec<Option<&str>> = page
        .items
        .iter()
        .map(|item| item.owner_name.as_deref())
        .collect();
    assert!(names.contains(&Some("Grace Hopper")));
    assert!(names.contains(&None));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pagination_walks_the_result_set_newest_first(harness: Harness) {
    let entries: Vec<String> = (0..5).map(|index| format!("task {index}")).collect();
    for task in &entries {
        harness
            .service
            .create_todo(draft(task, false, "user-1"))
            .await
            .expect("create succeeds");
    }

    let mut seen = Vec::new();
    for page_number in 1..=3 {
        let page = harness
            .service
            .list_todos_for_user(PageRequest::new(page_number, 2), &owner("user-1"))
            .await
            .expect("listing succeeds");
        assert_eq!(page.total_items, 5);
        assert_eq!(page.total_pages, 3);
        seen.extend(page.items.iter().map(|todo| todo.task().to_owned()));
    }

    assert_eq!(seen, ["task 4", "task 3", "task 2", "task 1", "task 0"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removed_todos_vanish_from_every_query_shape(harness: Harness) {
    seed(
        &harness.service,
        &[("keep", false, "user-1"), ("drop", false, "user-1")],
    )
    .await;
    let listed = harness
        .service
        .list_todos_for_user(PageRequest::new(1, 10), &owner("user-1"))
        .await
        .expect("listing succeeds");
    let doomed = listed
        .items
        .iter()
        .find(|todo| todo.task() == "drop")
        .expect("seeded todo listed");

    let matched = harness
        .service
        .remove_todos(&[doomed.id()])
        .await
        .expect("removal succeeds");
    assert_eq!(matched, 1);

    let by_user = harness
        .service
        .list_todos_for_user(PageRequest::new(1, 10), &owner("user-1"))
        .await
        .expect("listing succeeds");
    assert_eq!(by_user.total_items, 1);

    let by_substring = harness
        .service
        .list_todos(&TodoListFilter {
            task_contains: "drop".to_owned(),
            completed: None,
            page: PageRequest::new(1, 10),
        })
        .await
        .expect("listing succeeds");
    assert_eq!(by_substring.total_items, 0);

    let unfiltered = harness
        .service
        .list_todos(&TodoListFilter::default())
        .await
        .expect("listing succeeds");
    assert_eq!(unfiltered.total_items, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updates_are_visible_in_subsequent_listings(harness: Harness) {
    let created = harness
        .service
        .create_todo(draft("rename me", false, "user-1"))
        .await
        .expect("create succeeds");

    harness
        .service
        .update_todo(
            created.id(),
            &TodoPatch::new().with_task("renamed").with_completed(true),
        )
        .await
        .expect("update succeeds");

    let filter = TodoListFilter {
        task_contains: "renamed".to_owned(),
        completed: Some(true),
        page: PageRequest::new(1, 10),
    };
    let page = harness.service.list_todos(&filter).await.expect("listing succeeds");
    assert_eq!(page.total_items, 1);
}
