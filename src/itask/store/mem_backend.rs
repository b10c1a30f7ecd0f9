use super::backend::StorageBackend;
use crate::error::{ItaskError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since itask is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` without a lock.
#[derive(Default)]
pub struct MemBackend {
    items: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing the write counter.
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful `set_item` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Raw value currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ItaskError::Store("Simulated write error".to_string()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn item_path(&self, key: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let backend = MemBackend::new();
        assert_eq!(backend.get_item("todos").unwrap(), None);
    }

    #[test]
    fn set_replaces_previous_value() {
        let backend = MemBackend::new();
        backend.set_item("todos", "[1]").unwrap();
        backend.set_item("todos", "[2]").unwrap();
        assert_eq!(backend.get_item("todos").unwrap().as_deref(), Some("[2]"));
        assert_eq!(backend.write_count(), 2);
    }

    #[test]
    fn simulated_write_error_leaves_value_untouched() {
        let backend = MemBackend::new().with_item("todos", "[]");
        backend.set_simulate_write_error(true);

        assert!(backend.set_item("todos", "[1]").is_err());
        assert_eq!(backend.raw("todos").as_deref(), Some("[]"));
        assert_eq!(backend.write_count(), 0);
    }
}
