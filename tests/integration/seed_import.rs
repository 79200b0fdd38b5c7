//! Integration tests for the one-shot remote seed import.
//!
//! Runs a seed endpoint in-process and checks:
//! - The first N payload elements map into tasks (ids kept, statuses mapped)
//! - The fetched batch only seeds an empty store, and then persists
//! - Server errors and malformed payloads surface as a Failed event
//! - Fetched ids raise the id floor for later adds

use std::sync::Arc;
use std::time::Duration;

use axum::{Json, Router, routing::get};

use termtask::net::{self, SeedConfig, SeedEvent};
use termtask::storage::MemoryStore;
use termtask::tasks::TaskStore;
use termtask_core::seed::SEED_DESCRIPTION;
use termtask_core::task::TaskStatus;

/// Start an in-process seed endpoint serving a fixed JSON body.
async fn start_seed_server(payload: serde_json::Value) -> (String, tokio::task::JoinHandle<()>) {
    let app = Router::new().route(
        "/todos",
        get(move || {
            let payload = payload.clone();
            async move { Json(payload) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/todos"), handle)
}

/// One element in the upstream todo payload shape.
fn todo(id: u64, title: &str, completed: bool) -> serde_json::Value {
    serde_json::json!({
        "userId": 1,
        "id": id,
        "title": title,
        "completed": completed,
    })
}

/// Config for the given endpoint with the default import count.
fn seed_config(url: String) -> SeedConfig {
    SeedConfig {
        url,
        count: 5,
        timeout: Duration::from_secs(5),
    }
}

// =============================================================================
// Fetch and mapping
// =============================================================================

#[tokio::test]
async fn fetch_takes_the_first_five() {
    let payload = serde_json::json!([
        todo(1, "delectus aut autem", true),
        todo(2, "quis ut nam", false),
        todo(3, "fugiat veniam minus", true),
        todo(4, "et porro tempora", false),
        todo(5, "laboriosam mollitia", false),
        todo(6, "qui ullam ratione", true),
        todo(7, "illo expedita consequatur", false),
    ]);
    let (url, _handle) = start_seed_server(payload).await;

    let tasks = net::fetch_seed(&seed_config(url)).await.unwrap();

    assert_eq!(tasks.len(), 5);
    assert_eq!(tasks[0].title, "delectus aut autem");
    assert_eq!(tasks[4].title, "laboriosam mollitia");
    let done = tasks.iter().filter(|t| t.status == TaskStatus::Completed).count();
    assert_eq!(done, 2, "flags past the cutoff must not count");
}

#[tokio::test]
async fn fetch_keeps_ids_and_maps_statuses() {
    let payload = serde_json::json!([todo(42, "done upstream", true), todo(43, "still open", false)]);
    let (url, _handle) = start_seed_server(payload).await;

    let tasks = net::fetch_seed(&seed_config(url)).await.unwrap();

    assert_eq!(tasks[0].id.as_u64(), 42);
    assert_eq!(tasks[0].status, TaskStatus::Completed);
    assert_eq!(tasks[1].id.as_u64(), 43);
    assert_eq!(tasks[1].status, TaskStatus::Pending);
}

#[tokio::test]
async fn fetch_fills_in_the_placeholder_description() {
    let payload = serde_json::json!([todo(1, "delectus aut autem", false)]);
    let (url, _handle) = start_seed_server(payload).await;

    let tasks = net::fetch_seed(&seed_config(url)).await.unwrap();

    assert_eq!(tasks[0].description, SEED_DESCRIPTION);
}

#[tokio::test]
async fn fetch_with_fewer_elements_than_count() {
    let payload = serde_json::json!([todo(1, "only", false), todo(2, "two", true)]);
    let (url, _handle) = start_seed_server(payload).await;

    let tasks = net::fetch_seed(&seed_config(url)).await.unwrap();

    assert_eq!(tasks.len(), 2);
}

#[tokio::test]
async fn fetch_with_empty_payload_yields_no_tasks() {
    let (url, _handle) = start_seed_server(serde_json::json!([])).await;

    let tasks = net::fetch_seed(&seed_config(url)).await.unwrap();

    assert!(tasks.is_empty());
}

// =============================================================================
// Background fetch events
// =============================================================================

#[tokio::test]
async fn spawn_delivers_a_loaded_event() {
    let payload = serde_json::json!([todo(1, "delectus aut autem", false)]);
    let (url, _handle) = start_seed_server(payload).await;

    let mut rx = net::spawn_seed_fetch(seed_config(url));
    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("seed fetch timed out")
        .expect("seed channel closed without an event");

    match event {
        SeedEvent::Loaded(tasks) => {
            assert_eq!(tasks.len(), 1);
            assert_eq!(tasks[0].title, "delectus aut autem");
        }
        SeedEvent::Failed(reason) => panic!("expected Loaded, got Failed: {reason}"),
    }
}

#[tokio::test]
async fn server_error_yields_a_failed_event() {
    let app = Router::new().route(
        "/todos",
        get(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut rx = net::spawn_seed_fetch(seed_config(format!("http://{addr}/todos")));
    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("seed fetch timed out")
        .expect("seed channel closed without an event");

    assert!(matches!(event, SeedEvent::Failed(_)));
}

#[tokio::test]
async fn malformed_payload_yields_a_failed_event() {
    // An object where an array of todos is expected.
    let (url, _handle) = start_seed_server(serde_json::json!({"not": "a list"})).await;

    let mut rx = net::spawn_seed_fetch(seed_config(url));
    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("seed fetch timed out")
        .expect("seed channel closed without an event");

    assert!(matches!(event, SeedEvent::Failed(_)));
}

// =============================================================================
// Seeding the store
// =============================================================================

#[tokio::test]
async fn seed_fills_an_empty_store_and_persists() {
    let payload = serde_json::json!([todo(1, "delectus aut autem", false), todo(2, "quis ut nam", true)]);
    let (url, _handle) = start_seed_server(payload).await;
    let fetched = net::fetch_seed(&seed_config(url)).await.unwrap();

    let memory = Arc::new(MemoryStore::new());
    let mut store = TaskStore::new(Arc::clone(&memory));
    store.seed(fetched);

    assert_eq!(store.len(), 2);
    let persisted = memory.persisted().expect("seeding should persist");
    assert_eq!(persisted.len(), 2);
    assert_eq!(persisted[0].title, "delectus aut autem");
}

#[tokio::test]
async fn seed_is_declined_when_tasks_already_exist() {
    let payload = serde_json::json!([todo(1, "remote", false)]);
    let (url, _handle) = start_seed_server(payload).await;
    let fetched = net::fetch_seed(&seed_config(url)).await.unwrap();

    let mut store = TaskStore::new(MemoryStore::new());
    store.add("local task", "details").unwrap();
    store.seed(fetched);

    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].title, "local task");
}

#[tokio::test]
async fn seeded_ids_raise_the_id_floor() {
    let payload = serde_json::json!([todo(9_000_000_000_000_000u64, "far future", false)]);
    let (url, _handle) = start_seed_server(payload).await;
    let fetched = net::fetch_seed(&seed_config(url)).await.unwrap();

    let mut store = TaskStore::new(MemoryStore::new());
    store.seed(fetched);
    let new_id = store.add("local task", "details").unwrap();

    assert!(new_id.as_u64() > 9_000_000_000_000_000);
}
