//! Browser-scoped preference storage
//!
//! Small JSON records kept under fixed string keys. The raw key-value access
//! sits behind [`PreferenceStore`] so pages never touch `localStorage`
//! directly; [`Preferences`] layers typed JSON reads and writes on top.

use crate::CoreResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Cookie/tracking consent choices
pub const CONSENT_KEY: &str = "cookie-consent";
/// Favorited integrations on the voting page
pub const FAVORITES_KEY: &str = "integration_favorites";
/// Sign-up form snapshot handed to plan selection
pub const SIGNUP_DRAFT_KEY: &str = "signupUserData";
/// Plan chosen on the plan selection page
pub const SELECTED_PLAN_KEY: &str = "selectedPlan";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("write rejected: {0}")]
    WriteRejected(String),
}

/// Raw string key-value storage
pub trait PreferenceStore {
    /// Stored value for `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Remove `key`; does nothing when absent
    fn delete(&self, key: &str);
}

/// In-process store used by tests and previews
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Storage that is switched off (private browsing, disabled storage, or
/// rendering on the server). Reads are always absent.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: String) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn delete(&self, _key: &str) {}
}

/// Typed JSON access over an injected [`PreferenceStore`]
#[derive(Clone)]
pub struct Preferences {
    store: Rc<dyn PreferenceStore>,
}

impl Preferences {
    pub fn new(store: Rc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStore::new()))
    }

    pub fn unavailable() -> Self {
        Self::new(Rc::new(UnavailableStore))
    }

    /// Read and parse the record at `key`. Missing keys and values that do
    /// not parse both come back as `None`.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(key, error = %e, "Ignoring unparseable preference");
                None
            }
        }
    }

    /// Serialize and store `value`, surfacing failures to the caller
    pub fn try_write<T: Serialize>(&self, key: &str, value: &T) -> CoreResult<()> {
        let json = serde_json::to_string(value)?;
        self.store.set(key, json)?;
        Ok(())
    }

    /// Serialize and store `value`. Failures are logged and dropped; callers
    /// treat a lost write the same as a user who never chose anything.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_write(key, value) {
            tracing::warn!(key, error = %e, "Preference write dropped");
        }
    }

    pub fn remove(&self, key: &str) {
        self.store.delete(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.store.get(key).is_some()
    }
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_read_missing_key() {
        let prefs = Preferences::in_memory();
        assert_eq!(prefs.read::<Sample>("absent"), None);
    }

    #[test]
    fn test_write_then_read() {
        let prefs = Preferences::in_memory();
        let sample = Sample { name: "nightly".into(), count: 3 };
        prefs.write("sample", &sample);
        assert_eq!(prefs.read::<Sample>("sample"), Some(sample));
    }

    #[test]
    fn test_write_overwrites() {
        let prefs = Preferences::in_memory();
        prefs.write("sample", &Sample { name: "a".into(), count: 1 });
        prefs.write("sample", &Sample { name: "b".into(), count: 2 });
        assert_eq!(prefs.read::<Sample>("sample").map(|s| s.count), Some(2));
    }

    #[test]
    fn test_garbage_value_reads_as_absent() {
        let store = Rc::new(MemoryStore::new());
        store.set("sample", "{not json".to_string()).unwrap();
        let prefs = Preferences::new(store);
        assert_eq!(prefs.read::<Sample>("sample"), None);
        assert!(prefs.contains("sample"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let prefs = Preferences::in_memory();
        prefs.write("sample", &Sample { name: "x".into(), count: 0 });
        prefs.remove("sample");
        prefs.remove("sample");
        assert!(!prefs.contains("sample"));
    }

    #[test]
    fn test_unavailable_store_degrades_silently() {
        let prefs = Preferences::unavailable();
        prefs.write("sample", &Sample { name: "lost".into(), count: 9 });
        assert_eq!(prefs.read::<Sample>("sample"), None);
        assert!(matches!(
            prefs.try_write("sample", &Sample { name: "lost".into(), count: 9 }),
            Err(crate::CoreError::Storage(StoreError::Unavailable))
        ));
    }

    #[test]
    fn test_remove_without_storage_is_silent() {
        let prefs = Preferences::unavailable();
        prefs.remove("sample");
        assert!(!prefs.contains("sample"));
    }
}
