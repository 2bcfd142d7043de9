//! Persisted key-value storage for the preference slot.
//!
//! This module provides:
//!
//! - [`Storage`]: the string key-value seam the store persists through
//! - [`MemoryStorage`]: an in-process map, empty on creation
//! - [`FileStorage`]: a JSON object on disk that survives restarts
//! - [`StorageError`]: I/O and format failures from durable backends
//!
//! Values are plain strings. Interpreting them is the store's job.

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// A durable string key-value store, shaped like the browser's `localStorage`.
pub trait Storage {
    /// Returns the value under `key`, or `None` when the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
