use super::*;

#[test]
fn load_json_returns_none_for_missing_key() {
    let store = MemoryStore::default();
    assert_eq!(load_json::<UserRecord>(&store, USER_KEY), Ok(None));
}

#[test]
fn load_json_reports_malformed_values() {
    let store = MemoryStore::default();
    store.insert(USER_KEY, "{not json");
    let err = load_json::<UserRecord>(&store, USER_KEY).unwrap_err();
    assert!(matches!(err, StorageError::Malformed { ref key, .. } if key == USER_KEY));
}

#[test]
fn load_user_reads_stored_record() {
    let store = MemoryStore::default();
    store.insert(USER_KEY, r#"{"name":"Maria Clara"}"#);
    let record = load_user(&store).unwrap();
    assert_eq!(record.name.as_deref(), Some("Maria Clara"));
}

#[test]
fn load_user_treats_malformed_record_as_absent() {
    let store = MemoryStore::default();
    store.insert(USER_KEY, "42");
    assert!(load_user(&store).is_none());
}

#[test]
fn memory_store_remove_is_idempotent() {
    let store = MemoryStore::default();
    store.insert(USER_KEY, "{}");
    store.remove_item(USER_KEY).unwrap();
    store.remove_item(USER_KEY).unwrap();
    assert!(!store.contains(USER_KEY));
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_unavailable_without_browser() {
    assert_eq!(LocalStorage.get_item(USER_KEY), Err(StorageError::Unavailable));
    assert!(load_user(&LocalStorage).is_none());
}
