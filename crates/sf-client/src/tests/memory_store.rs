use crate::{MemorySessionStore, SessionKey, SessionStore};

#[test]
fn test_empty_store_reads_none() {
    let store = MemorySessionStore::new();
    assert_eq!(store.get(SessionKey::Token).unwrap(), None);
    assert_eq!(store.get(SessionKey::User).unwrap(), None);
}

#[test]
fn test_set_overwrites_and_keys_are_independent() {
    let store = MemorySessionStore::new();
    store.set(SessionKey::Token, "first").unwrap();
    store.set(SessionKey::Token, "second").unwrap();

    assert_eq!(
        store.get(SessionKey::Token).unwrap().as_deref(),
        Some("second")
    );
    assert_eq!(store.get(SessionKey::User).unwrap(), None);
}

#[test]
fn test_remove_missing_key_is_ok() {
    let store = MemorySessionStore::new();
    store.remove(SessionKey::User).unwrap();
    store.set(SessionKey::User, "{}").unwrap();
    store.remove(SessionKey::User).unwrap();
    assert_eq!(store.get(SessionKey::User).unwrap(), None);
}

#[test]
fn test_key_names() {
    assert_eq!(SessionKey::Token.as_str(), "token");
    assert_eq!(SessionKey::User.to_string(), "user");
}
