//! Session store
//!
//! The token and the user record live under two fixed keys: written together,
//! read independently, removed together. Screens read the store on mount;
//! nothing is pushed to them when it changes.

use crate::web::{BrowserStorage, MemoryStorage, StorageBackend, StorageError};
use leptos::logging::{error, warn};
use leptos::prelude::*;
use std::sync::Arc;
use turf_shared::{Session, User};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Injectable session store, shared through Leptos context.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// `localStorage`, or process memory when the browser refuses it.
    pub fn browser() -> Self {
        if BrowserStorage::is_available() {
            Self::new(BrowserStorage)
        } else {
            warn!("[Session] localStorage unavailable, session will not survive a reload");
            Self::new(MemoryStorage::new())
        }
    }

    /// Raw token, if one was stored.
    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Stored user record. An unparsable record counts as absent.
    pub fn user(&self) -> Option<User> {
        let raw = self.backend.get(USER_KEY)?;
        match serde_json_wasm::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("[Session] ignoring unreadable user record: {}", e);
                None
            }
        }
    }

    /// The visitor counts as signed in whenever a user record is present.
    /// The token is not checked against the server.
    pub fn load(&self) -> Option<Session> {
        let user = self.user()?;
        Some(Session {
            token: self.token().unwrap_or_default(),
            user,
        })
    }

    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let user = serde_json_wasm::to_string(&session.user)
            .map_err(|e| StorageError(format!("user record: {}", e)))?;
        let previous_token = self.backend.get(TOKEN_KEY);
        let previous_user = self.backend.get(USER_KEY);

        self.backend.set(TOKEN_KEY, &session.token)?;
        if let Err(e) = self.backend.set(USER_KEY, &user) {
            error!("[Session] user record not written, restoring previous session: {}", e);
            self.restore(TOKEN_KEY, previous_token);
            self.restore(USER_KEY, previous_user);
            return Err(e);
        }
        Ok(())
    }

    fn restore(&self, key: &str, previous: Option<String>) {
        match previous {
            Some(value) => {
                if let Err(e) = self.backend.set(key, &value) {
                    warn!("[Session] could not restore {}: {}", key, e);
                }
            }
            None => self.backend.remove(key),
        }
    }

    pub fn clear(&self) {
        self.backend.remove(USER_KEY);
        self.backend.remove(TOKEN_KEY);
    }
}

/// Session store provided by `App`
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().expect("SessionStore should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "tok-123".to_string(),
            user: User {
                first_name: Some("Asha".to_string()),
                ..User::new("asha@example.com")
            },
        }
    }

    #[test]
    fn save_writes_raw_token_and_user_json() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());

        store.save(&session()).unwrap();

        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok-123"));
        assert_eq!(
            storage.get(USER_KEY).as_deref(),
            Some(r#"{"email":"asha@example.com","firstName":"Asha"}"#)
        );
        assert_eq!(store.load(), Some(session()));
    }

    #[test]
    fn user_alone_counts_as_signed_in() {
        let storage = MemoryStorage::new();
        storage.set(USER_KEY, r#"{"email":"a@b.com"}"#).unwrap();
        let store = SessionStore::new(storage);

        let loaded = store.load().unwrap();
        assert_eq!(loaded.user.email, "a@b.com");
        assert_eq!(loaded.token, "");
        assert_eq!(store.token(), None);
    }

    #[test]
    fn corrupt_user_record_is_anonymous() {
        let storage = MemoryStorage::new();
        storage.set(USER_KEY, "{not json").unwrap();
        let store = SessionStore::new(storage);
        assert_eq!(store.user(), None);
        assert_eq!(store.load(), None);
    }

    /// Accepts every write except the user record.
    struct UserWriteFails(MemoryStorage);

    impl StorageBackend for UserWriteFails {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == USER_KEY {
                return Err(StorageError("quota".to_string()));
            }
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.0.remove(key)
        }
    }

    #[test]
    fn failed_save_keeps_previous_session_intact() {
        let storage = MemoryStorage::new();
        let previous = Session {
            token: "old-token".to_string(),
            user: User::new("old@x.com"),
        };
        SessionStore::new(storage.clone()).save(&previous).unwrap();
        let store = SessionStore::new(UserWriteFails(storage.clone()));

        let err = store.save(&session()).unwrap_err();

        assert_eq!(err, StorageError("quota".to_string()));
        assert_eq!(store.token().as_deref(), Some("old-token"));
        assert_eq!(store.load(), Some(previous));
    }

    #[test]
    fn failed_first_save_leaves_nothing_behind() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(UserWriteFails(storage.clone()));

        assert!(store.save(&session()).is_err());
        assert!(!storage.contains(TOKEN_KEY));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn clear_removes_both_keys() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.save(&session()).unwrap();

        store.clear();

        assert!(!storage.contains(USER_KEY));
        assert!(!storage.contains(TOKEN_KEY));
        assert_eq!(store.load(), None);
    }
}
