//! Session Persistence
//!
//! The logged-in user is remembered by a single `userID` key in the
//! browser's key-value storage. Presence of the key is the whole session.

use crate::error::StorageError;

/// Storage key holding the session owner's id
pub const SESSION_KEY: &str = "userID";

/// Minimal key-value persistence facility
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Session guard over a storage backend
#[derive(Clone, Copy, Debug, Default)]
pub struct Session<S> {
    storage: S,
}

impl<S: KeyValueStorage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Current session owner, if any. Empty values count as absent.
    pub fn user_id(&self) -> Option<String> {
        self.storage
            .get(SESSION_KEY)
            .filter(|id| !id.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id().is_some()
    }

    /// Persist the id returned by a successful sign-in
    pub fn sign_in(&self, user_id: &str) -> Result<(), StorageError> {
        self.storage.set(SESSION_KEY, user_id)
    }

    pub fn sign_out(&self) {
        self.storage.remove(SESSION_KEY);
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_and_out() {
        let storage = MemoryStorage::default();
        let session = Session::new(storage.clone());
        assert!(!session.is_authenticated());

        session.sign_in("17").unwrap();
        assert_eq!(session.user_id().as_deref(), Some("17"));
        assert_eq!(storage.get(SESSION_KEY).as_deref(), Some("17"));

        session.sign_out();
        assert_eq!(session.user_id(), None);
        assert_eq!(storage.get(SESSION_KEY), None);
    }

    #[test]
    fn test_blank_id_is_not_a_session() {
        let storage = MemoryStorage::default();
        storage.set(SESSION_KEY, "  ").unwrap();
        assert!(!Session::new(storage).is_authenticated());
    }
}
