use crate::{FileSessionStore, SessionKey, SessionStore, StoreError};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use tempfile::TempDir;

fn store_in(temp: &TempDir) -> FileSessionStore {
    FileSessionStore::new(temp.path().join("session.json"))
}

#[test]
fn given_no_file_when_get_then_none() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    // When
    let result = store.get(SessionKey::Token);

    // Then
    assert_that!(result, ok(anything()));
    assert_eq!(result.unwrap(), None);
    assert!(!store.path().exists());
}

#[test]
fn given_entries_written_when_reopened_then_values_persist() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.set(SessionKey::Token, "jwt-123").unwrap();
    store.set(SessionKey::User, r#"{"id":7}"#).unwrap();

    // When
    let reopened = store_in(&temp);

    // Then
    assert_eq!(
        reopened.get(SessionKey::Token).unwrap().as_deref(),
        Some("jwt-123")
    );
    assert_eq!(
        reopened.get(SessionKey::User).unwrap().as_deref(),
        Some(r#"{"id":7}"#)
    );
}

#[test]
fn given_nested_missing_directory_when_set_then_created() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = FileSessionStore::new(temp.path().join("a/b/session.json"));

    // When
    let result = store.set(SessionKey::Token, "jwt");

    // Then
    assert_that!(result, ok(anything()));
    assert!(store.path().exists());
}

#[test]
fn given_both_entries_removed_when_remove_then_file_deleted() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.set(SessionKey::Token, "jwt").unwrap();
    store.set(SessionKey::User, "{}").unwrap();

    // When
    store.remove(SessionKey::Token).unwrap();
    store.remove(SessionKey::User).unwrap();

    // Then
    assert!(!store.path().exists());
    assert_eq!(store.get(SessionKey::Token).unwrap(), None);
}

#[test]
fn given_corrupted_file_when_get_then_corrupted_error() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    std::fs::write(store.path(), "not json").unwrap();

    // When
    let result = store.get(SessionKey::Token);

    // Then
    assert_that!(result, err(anything()));
    assert!(matches!(result, Err(StoreError::Corrupted { .. })));
}

#[test]
fn given_corrupted_file_when_set_then_file_replaced() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    std::fs::write(store.path(), "{{{").unwrap();

    // When
    store.set(SessionKey::Token, "fresh").unwrap();

    // Then
    assert_eq!(
        store.get(SessionKey::Token).unwrap().as_deref(),
        Some("fresh")
    );
}

#[test]
fn given_write_when_done_then_no_temp_file_left() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    // When
    store.set(SessionKey::Token, "jwt").unwrap();

    // Then
    let leftovers: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().contains(".tmp."))
        .collect();
    assert!(leftovers.is_empty());
}
