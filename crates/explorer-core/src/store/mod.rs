//! # Persistence Store
//!
//! Synchronous string-keyed storage that survives across sessions.
//!
//! - [`MemoryStore`] - process-local map, used in tests and as a fallback
//! - [`FileStore`] - JSON file on disk

mod error;
mod file;
mod memory;

use std::sync::Arc;

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Trait for key-value persistence backends.
pub trait PersistenceStore: Send + Sync {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<T: PersistenceStore> PersistenceStore for Arc<T> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}
