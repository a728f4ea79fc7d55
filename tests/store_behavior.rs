// File: tests/store_behavior.rs
use chore::error::ChoreError;
use chore::model::Task;
use chore::store::TaskStore;

fn store_with(descriptions: &[&str]) -> TaskStore {
    let mut store = TaskStore::new();
    for desc in descriptions {
        store.add(Task::plain(desc).unwrap());
    }
    store
}

#[test]
fn test_add_preserves_insertion_order() {
    let store = store_with(&["a", "b", "c"]);
    let descs: Vec<&str> = store.all().iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descs, vec!["a", "b", "c"]);
}

#[test]
fn test_duplicate_descriptions_permitted() {
    let store = store_with(&["same", "same"]);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_mark_and_unmark_toggle_done() {
    let mut store = store_with(&["a", "b"]);

    let marked = store.mark(2).unwrap();
    assert!(marked.done);
    assert!(store.all()[1].done);
    assert!(!store.all()[0].done);

    let unmarked = store.unmark(2).unwrap();
    assert!(!unmarked.done);
    assert!(!store.all()[1].done);
}

#[test]
fn test_delete_removes_and_returns_the_task() {
    let mut store = store_with(&["a", "b", "c"]);
    let removed = store.delete(2).unwrap();
    assert_eq!(removed.description, "b");
    assert_eq!(store.len(), 2);
    let descs: Vec<&str> = store.all().iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descs, vec!["a", "c"]);
}

#[test]
fn test_index_bounds_are_exact() {
    let invalid = ChoreError::Validation("Invalid task number.".to_string());

    let mut store = store_with(&["a", "b", "c"]);
    // Boundaries succeed...
    assert!(store.mark(1).is_ok());
    assert!(store.mark(3).is_ok());
    // ...and everything outside 1..=len fails, with the store untouched.
    assert_eq!(store.mark(0).unwrap_err(), invalid);
    assert_eq!(store.unmark(4).unwrap_err(), invalid);
    assert_eq!(store.delete(-1).unwrap_err(), invalid);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_mark_two_on_single_task_collection_fails() {
    let mut store = store_with(&["only"]);
    assert_eq!(
        store.mark(2).unwrap_err(),
        ChoreError::Validation("Invalid task number.".to_string())
    );
}

#[test]
fn test_empty_store_rejects_every_index() {
    let mut store = TaskStore::new();
    assert!(store.mark(1).is_err());
    assert!(store.delete(1).is_err());
}
