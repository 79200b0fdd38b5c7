//! Integration tests for snapshot persistence.
//!
//! Exercises the file-backed store end to end:
//! - Mutations flow through to disk and survive a restart
//! - Missing or corrupt snapshots fall back to an empty list
//! - Write failures are absorbed without losing in-memory state
//! - The on-disk format stays a flat JSON array

use std::path::PathBuf;

use termtask::storage::JsonFileStore;
use termtask::tasks::TaskStore;
use termtask_core::task::{TaskId, TaskStatus};

/// Snapshot path inside a fresh temp dir.
fn snapshot_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("tasks.json")
}

/// A store writing to the given path.
fn store_at(path: PathBuf) -> TaskStore<JsonFileStore> {
    TaskStore::new(JsonFileStore::new(path))
}

#[test]
fn mutations_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = snapshot_path(&dir);

    let mut store = store_at(path.clone());
    assert!(!store.load(), "fresh path should have nothing to load");

    let milk = store.add("Buy milk", "Two liters").unwrap();
    let dog = store.add("Walk dog", "Around the block").unwrap();
    store.add("Read book", "One chapter").unwrap();
    store.complete(milk).unwrap();
    store.delete(dog).unwrap();
    store.edit(milk, "Buy oat milk", "One liter").unwrap();
    store.reorder(0, 1).unwrap();

    // A second store over the same path sees the final state.
    let mut reloaded = store_at(path);
    assert!(reloaded.load());

    let tasks = reloaded.tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].title, "Read book");
    assert_eq!(tasks[1].title, "Buy oat milk");
    assert_eq!(tasks[1].description, "One liter");
    assert_eq!(tasks[1].status, TaskStatus::Completed);
}

#[test]
fn reload_preserves_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = snapshot_path(&dir);

    let mut store = store_at(path.clone());
    let id = store.add("Buy milk", "Two liters").unwrap();

    let mut reloaded = store_at(path);
    assert!(reloaded.load());
    assert_eq!(reloaded.tasks()[0].id, id);
}

#[test]
fn loaded_ids_raise_the_id_floor() {
    let dir = tempfile::tempdir().unwrap();
    let path = snapshot_path(&dir);

    // Persist a task with an id far above the current clock.
    let mut store = store_at(path.clone());
    store.seed(vec![termtask_core::task::Task {
        id: TaskId::new(9_000_000_000_000_000),
        title: "future task".to_string(),
        description: "details".to_string(),
        status: TaskStatus::Pending,
    }]);

    let mut reloaded = store_at(path);
    assert!(reloaded.load());
    let new_id = reloaded.add("Buy milk", "Two liters").unwrap();
    assert!(new_id.as_u64() > 9_000_000_000_000_000);
}

#[test]
fn missing_file_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = store_at(snapshot_path(&dir));
    assert!(!store.load());
    assert!(store.is_empty());
}

#[test]
fn corrupt_snapshot_is_ignored_and_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = snapshot_path(&dir);
    std::fs::write(&path, b"{ not json ]").unwrap();

    let mut store = store_at(path.clone());
    assert!(!store.load(), "corrupt snapshot should load nothing");
    assert!(store.is_empty());

    // The first mutation replaces the corrupt file with a valid snapshot.
    store.add("Buy milk", "Two liters").unwrap();
    let mut reloaded = store_at(path);
    assert!(reloaded.load());
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn empty_list_snapshot_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = snapshot_path(&dir);
    std::fs::write(&path, b"[]").unwrap();

    let mut store = store_at(path);
    assert!(!store.load(), "an empty snapshot should count as no data");
}

#[test]
fn write_failure_keeps_in_memory_state() {
    // Point the store at a directory so every write fails.
    let dir = tempfile::tempdir().unwrap();

    let mut store = store_at(dir.path().to_path_buf());
    let id = store.add("Buy milk", "Two liters").unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(id).map(|t| t.title.as_str()), Some("Buy milk"));

    // Later mutations keep working in memory.
    store.complete(id).unwrap();
    assert_eq!(store.tasks()[0].status, TaskStatus::Completed);
}

#[test]
fn snapshot_format_is_a_flat_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = snapshot_path(&dir);

    let mut store = store_at(path.clone());
    let id = store.add("Buy milk", "Two liters").unwrap();
    store.complete(id).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    let array = value.as_array().expect("snapshot should be a JSON array");
    assert_eq!(array.len(), 1);
    let entry = &array[0];
    assert_eq!(entry["id"], serde_json::json!(id.as_u64()));
    assert_eq!(entry["title"], "Buy milk");
    assert_eq!(entry["description"], "Two liters");
    assert_eq!(entry["status"], "Completed");
}
