//! Browser `localStorage` access for the cached user identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sign-in page stores the user record under [`USER_KEY`]; this page only
//! reads it for the greeting and removes it on logout. [`PreferenceStore`]
//! keeps the page controller independent of `web-sys` so it can be driven by
//! [`MemoryStore`] in native tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::net::types::UserRecord;

/// Key holding the JSON-encoded [`UserRecord`].
pub const USER_KEY: &str = "user";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage operation failed for `{0}`")]
    Operation(String),
    #[error("stored value for `{key}` is not valid JSON: {reason}")]
    Malformed { key: String, reason: String },
}

/// Key-value persistence the page reads preferences from.
pub trait PreferenceStore {
    /// Raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be reached.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Decode the JSON value stored under `key`.
///
/// # Errors
///
/// Propagates storage failures and reports undecodable values as
/// [`StorageError::Malformed`].
pub fn load_json<T: DeserializeOwned>(store: &impl PreferenceStore, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get_item(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw).map(Some).map_err(|e| StorageError::Malformed {
        key: key.to_owned(),
        reason: e.to_string(),
    })
}

/// Read the cached user record. Storage problems count as "no record".
pub fn load_user(store: &impl PreferenceStore) -> Option<UserRecord> {
    match load_json::<UserRecord>(store, USER_KEY) {
        Ok(record) => record,
        Err(e) => {
            log::warn!("ignoring cached user record: {e}");
            None
        }
    }
}

/// [`PreferenceStore`] over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|_| StorageError::Operation(key.to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|_| StorageError::Operation(key.to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

/// In-memory [`PreferenceStore`] for native runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn insert(&self, key: &str, value: impl Into<String>) {
        self.items.borrow_mut().insert(key.to_owned(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
