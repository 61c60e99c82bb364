//! `localStorage` backing for widget state.

use desk_core::{DeskError, DeskResult, KeyValueStore, MemoryStore};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> Option<Self> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> DeskResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|_| DeskError::Storage(format!("Failed to read {key} from localStorage")))
    }

    fn set(&self, key: &str, value: &str) -> DeskResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|_| DeskError::Storage(format!("Failed to write {key}; storage may be full")))
    }

    fn remove(&self, key: &str) -> DeskResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|_| DeskError::Storage(format!("Failed to remove {key} from localStorage")))
    }
}

thread_local! {
    static FALLBACK: MemoryStore = MemoryStore::new();
}

fn with_store<R>(f: impl FnOnce(&dyn KeyValueStore) -> R) -> R {
    match LocalStore::open() {
        Some(store) => f(&store),
        None => FALLBACK.with(|store| f(store)),
    }
}

/// Load widget state, falling back to its default when missing or corrupt.
pub fn load_widget<T>(key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    with_store(|store| desk_core::load_or_default(store, key))
}

pub fn save_widget<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    with_store(|store| desk_core::save_json(store, key, value)).map_err(|e| {
        dioxus_logger::tracing::warn!("Failed to persist {}: {}", key, e);
        e.to_string()
    })
}

pub fn load_raw(key: &str) -> Option<String> {
    with_store(|store| store.get(key).ok().flatten())
}

pub fn save_raw(key: &str, value: &str) {
    if let Err(e) = with_store(|store| store.set(key, value)) {
        dioxus_logger::tracing::warn!("Failed to persist {}: {}", key, e);
    }
}
