//! LocalStorage backend (WASM only)

use wasm_bindgen::JsValue;

use crate::error::StorageError;
use crate::persistence::KeyValueStore;

/// Handle to `window.localStorage`
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    /// Open the window's LocalStorage
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

fn backend_error(op: &'static str, key: &str, err: JsValue) -> StorageError {
    StorageError::Backend {
        op,
        key: key.to_string(),
        message: format!("{:?}", err),
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| backend_error("read", key, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| backend_error("write", key, e))
    }
}
