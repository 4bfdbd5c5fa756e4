//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory natively)
//! - Reading user-picked files into data URLs

#[cfg(target_arch = "wasm32")]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;

/// Default store for the current platform
#[cfg(target_arch = "wasm32")]
pub fn default_store() -> crate::Result<LocalStore> {
    Ok(LocalStore::open()?)
}

/// Default store for the current platform
#[cfg(not(target_arch = "wasm32"))]
pub fn default_store() -> crate::Result<crate::persistence::MemoryStore> {
    Ok(crate::persistence::MemoryStore::new())
}
