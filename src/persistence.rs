//! Persistence Bridge
//!
//! Moves the item list between memory and a key-value store.
//! In the browser the store is `window.localStorage`.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::models::{duplicate_id, Item, ItemId};

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("failed to encode item list: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode stored item list: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("stored item list has duplicate id {0}")]
    DuplicateId(ItemId),
}

/// String key-value storage, synchronous like the browser's `Storage` API
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), PersistError>;

    /// Drop `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), PersistError>;
}

/// `window.localStorage`
#[derive(Clone)]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn local() -> Result<Self, PersistError> {
        let window = web_sys::window().ok_or(PersistError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or(PersistError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), PersistError> {
        self.storage.remove_item(key).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> PersistError {
    PersistError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Key that receives an unreadable stored value before it is discarded
pub fn backup_key(key: &str) -> String {
    format!("{}.bak", key)
}

/// Read the item list stored under `key`.
///
/// A missing entry and a stored `null` both yield an empty list.
pub fn load<S: KeyValueStore + ?Sized>(storage: &S, key: &str) -> Result<Vec<Item>, PersistError> {
    let Some(raw) = storage.get(key)? else {
        return Ok(Vec::new());
    };
    let items: Option<Vec<Item>> = serde_json::from_str(&raw).map_err(PersistError::Decode)?;
    let items = items.unwrap_or_default();
    if let Some(id) = duplicate_id(&items) {
        return Err(PersistError::DuplicateId(id));
    }
    Ok(items)
}

/// Write `items` under `key` as a JSON array
pub fn save<S: KeyValueStore + ?Sized>(storage: &S, key: &str, items: &[Item]) -> Result<(), PersistError> {
    let raw = serde_json::to_string(items).map_err(PersistError::Encode)?;
    storage.set(key, &raw)
}

/// Startup load. Never fails: unreadable data is moved to
/// [`backup_key`] and the app starts with an empty list.
pub fn restore<S: KeyValueStore + ?Sized>(storage: &S, key: &str) -> Vec<Item> {
    match load(storage, key) {
        Ok(items) => {
            log::info!("loaded {} items from '{}'", items.len(), key);
            items
        }
        Err(err) => {
            log::warn!("starting with an empty list, stored data under '{}' is unusable: {}", key, err);
            if let Ok(Some(raw)) = storage.get(key) {
                let backup = backup_key(key);
                match storage.set(&backup, &raw).and_then(|()| storage.remove(key)) {
                    Ok(()) => log::info!("previous data moved to '{}'", backup),
                    Err(e) => log::error!("failed to back up '{}': {}", key, e),
                }
            }
            Vec::new()
        }
    }
}
