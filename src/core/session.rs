//! Mock session handling
//!
//! There is no server behind the login flow: any non-empty credentials produce
//! the same fabricated user, which is persisted as JSON under [`SESSION_KEY`].
//! Nothing validates a stored record beyond parsing it.

use serde::{Deserialize, Serialize};

use super::storage::{KeyValueStore, SESSION_KEY, StorageError};

/// Display name given to every mock login
pub const MOCK_USER_NAME: &str = "John Doe";

/// Identifier given to every mock login
pub const MOCK_USER_ID: u32 = 1;

/// Logged-in user record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: u32,
    pub email: String,
    pub name: String,
}

impl SessionUser {
    /// Fabricate the mock user for an email address
    pub fn mock(email: impl Into<String>) -> Self {
        Self {
            id: MOCK_USER_ID,
            email: email.into(),
            name: MOCK_USER_NAME.to_string(),
        }
    }
}

/// Persist the session record
pub fn save_session(store: &impl KeyValueStore, user: &SessionUser) -> Result<(), StorageError> {
    let json = serde_json::to_string(user)?;
    store.set(SESSION_KEY, &json)
}

/// Read the persisted session record, if any
pub fn load_session(store: &impl KeyValueStore) -> Result<Option<SessionUser>, StorageError> {
    match store.get(SESSION_KEY)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Remove the persisted session record
pub fn clear_session(store: &impl KeyValueStore) -> Result<(), StorageError> {
    store.remove(SESSION_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    #[test]
    fn test_session_roundtrip_uses_expected_json_shape() {
        let store = MemoryStore::new();
        save_session(&store, &SessionUser::mock("a@b.com")).unwrap();

        let raw = store.get(SESSION_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"id":1,"email":"a@b.com","name":"John Doe"}"#);

        let restored = load_session(&store).unwrap().unwrap();
        assert_eq!(restored.email, "a@b.com");
        assert_eq!(restored.name, MOCK_USER_NAME);
    }

    #[test]
    fn test_load_session_without_record() {
        let store = MemoryStore::new();
        assert_eq!(load_session(&store).unwrap(), None);
    }

    #[test]
    fn test_load_session_malformed_record() {
        let store = MemoryStore::new();
        store.set(SESSION_KEY, "{not json").unwrap();
        assert!(matches!(
            load_session(&store),
            Err(StorageError::Malformed(_))
        ));
    }

    #[test]
    fn test_clear_session() {
        let store = MemoryStore::new();
        save_session(&store, &SessionUser::mock("x@y.z")).unwrap();
        clear_session(&store).unwrap();
        assert!(store.is_empty());
    }
}
