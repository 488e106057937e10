//! Blob-store collaborator interface for cart persistence.

use std::collections::HashMap;

use thiserror::Error;

/// Errors surfaced by a cart store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend refused the write (the browser analog has a quota).
    #[error("storage quota exceeded")]
    QuotaExceeded,
    /// The backend could not be reached at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Key-value blob store holding serialized cart snapshots.
///
/// Browser-local persistent storage is the production backend and lives
/// outside this crate; [`MemoryStore`] serves tests and server-side
/// composition.
pub trait CartStore {
    /// Reads the blob stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` under `key`, replacing any previous blob.
    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes the blob under `key`. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory [`CartStore`] backed by a `HashMap`.
///
/// # Examples
///
/// ```
/// use storefront_core::cart::{CartStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.put("k", "v")?;
/// assert_eq!(store.get("k")?, Some("v".to_string()));
/// store.remove("k")?;
/// assert_eq!(store.get("k")?, None);
/// # Ok::<(), storefront_core::cart::StoreError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
