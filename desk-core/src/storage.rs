//! Key/value persistence for widget state.
//!
//! The browser build backs this with `localStorage`; tests use [`MemoryStore`].
//! Values are JSON documents keyed by the `deskhub.*` constants in
//! `shared_types`.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DeskError, DeskResult};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> DeskResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> DeskResult<()>;
    fn remove(&self, key: &str) -> DeskResult<()>;
}

/// In-memory store used by tests and as a fallback when browser storage is
/// unavailable (private mode, sandboxed iframes).
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

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> DeskResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> DeskResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> DeskResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Load and decode a stored value. A missing key is `Ok(None)`.
pub fn load_json<T, S>(store: &S, key: &str) -> DeskResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| DeskError::Storage(format!("Corrupt value for {key}: {e}")))
}

/// Load a stored value, falling back to `T::default()` when it is missing or
/// unreadable.
pub fn load_or_default<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    match load_json(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding stored widget state");
            T::default()
        }
    }
}

pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> DeskResult<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)
        .map_err(|e| DeskError::Storage(format!("Failed to encode {key}: {e}")))?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Counter {
        value: u32,
    }

    #[test]
    fn missing_key_loads_none() {
        let store = MemoryStore::new();
        let loaded: Option<Counter> = load_json(&store, "deskhub.counter").unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn save_then_load() {
        let store = MemoryStore::new();
        save_json(&store, "deskhub.counter", &Counter { value: 3 }).unwrap();
        let loaded: Counter = load_or_default(&store, "deskhub.counter");
        assert_eq!(loaded, Counter { value: 3 });
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn corrupt_value_is_a_storage_error() {
        let store = MemoryStore::new();
        store.set("deskhub.counter", "{not json").unwrap();
        let err = load_json::<Counter, _>(&store, "deskhub.counter").unwrap_err();
        assert!(matches!(err, DeskError::Storage(_)));
    }

    #[test]
    fn corrupt_value_falls_back_to_default() {
        let store = MemoryStore::new();
        store.set("deskhub.counter", "[1,2,3]").unwrap();
        let loaded: Counter = load_or_default(&store, "deskhub.counter");
        assert_eq!(loaded, Counter::default());
    }

    #[test]
    fn remove_clears_key() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        assert!(store.is_empty());
    }
}
