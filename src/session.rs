//! Session Storage
//!
//! Reads the login token, user and selected item written to local storage
//! by the sign-in and dashboard pages.

use serde::Deserialize;
use thiserror::Error;

use crate::models::{number_or_string, ItemTarget};

pub const TOKEN_KEY: &str = "@VirtualStore:token";
pub const USER_KEY: &str = "@VirtualStore:user";
pub const ITEM_ID_KEY: &str = "@VirtualStore:itemId";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("local storage is unavailable")]
    StorageUnavailable,

    #[error("missing session value `{0}`")]
    Missing(&'static str),

    #[error("stored user is not valid: {0}")]
    InvalidUser(String),
}

/// Read-only key/value view of the session store
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;
}

/// `window.localStorage`
pub struct LocalStorage;

impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let storage = web_sys::window()
            .ok_or(SessionError::StorageUnavailable)?
            .local_storage()
            .map_err(|_| SessionError::StorageUnavailable)?
            .ok_or(SessionError::StorageUnavailable)?;
        storage.get_item(key).map_err(|_| SessionError::StorageUnavailable)
    }
}

#[derive(Deserialize)]
struct StoredUser {
    #[serde(deserialize_with = "number_or_string")]
    id: String,
}

fn required(store: &impl SessionStore, key: &'static str) -> Result<String, SessionError> {
    match store.get(key)? {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(SessionError::Missing(key)),
    }
}

/// Resolve the item the user picked, with their credentials
pub fn read_item_target(store: &impl SessionStore) -> Result<ItemTarget, SessionError> {
    let token = required(store, TOKEN_KEY)?;
    let raw_user = required(store, USER_KEY)?;
    let user: StoredUser =
        serde_json::from_str(&raw_user).map_err(|e| SessionError::InvalidUser(e.to_string()))?;
    let item_id = required(store, ITEM_ID_KEY)?;

    Ok(ItemTarget {
        user_id: user.id,
        item_id,
        token,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory store for tests
    #[derive(Default)]
    pub struct MemoryStore(pub HashMap<String, String>);

    impl MemoryStore {
        pub fn with(entries: &[(&str, &str)]) -> Self {
            Self(entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
        }
    }

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
            Ok(self.0.get(key).cloned())
        }
    }

    pub fn full_session() -> MemoryStore {
        MemoryStore::with(&[
            (TOKEN_KEY, "tok-123"),
            (USER_KEY, r#"{"id":42,"name":"Ana"}"#),
            (ITEM_ID_KEY, "9"),
        ])
    }

    #[test]
    fn test_read_item_target() {
        let target = read_item_target(&full_session()).unwrap();
        assert_eq!(target.user_id, "42");
        assert_eq!(target.item_id, "9");
        assert_eq!(target.token, "tok-123");
    }

    #[test]
    fn test_string_user_id() {
        let store = MemoryStore::with(&[
            (TOKEN_KEY, "t"),
            (USER_KEY, r#"{"id":"a1b2"}"#),
            (ITEM_ID_KEY, "3"),
        ]);
        assert_eq!(read_item_target(&store).unwrap().user_id, "a1b2");
    }

    #[test]
    fn test_missing_item_id() {
        let store = MemoryStore::with(&[(TOKEN_KEY, "t"), (USER_KEY, r#"{"id":1}"#)]);
        assert_eq!(read_item_target(&store), Err(SessionError::Missing(ITEM_ID_KEY)));
    }

    #[test]
    fn test_blank_token_is_missing() {
        let store = MemoryStore::with(&[(TOKEN_KEY, " "), (USER_KEY, r#"{"id":1}"#), (ITEM_ID_KEY, "3")]);
        assert_eq!(read_item_target(&store), Err(SessionError::Missing(TOKEN_KEY)));
    }

    #[test]
    fn test_user_without_id() {
        let store = MemoryStore::with(&[(TOKEN_KEY, "t"), (USER_KEY, "{}"), (ITEM_ID_KEY, "3")]);
        assert!(matches!(read_item_target(&store), Err(SessionError::InvalidUser(_))));
    }
}
