//! In-process storage.

use std::collections::HashMap;

use super::{Storage, StorageError};

/// A [`Storage`] backed by a `HashMap`, lost when dropped.
///
/// Behaves like a fresh browser profile: every key starts absent.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item, returning the updated storage for chaining.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrativenet::{MemoryStorage, Storage};
    ///
    /// let storage = MemoryStorage::new().with_item("theme", "dark");
    /// assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
    /// ```
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}
