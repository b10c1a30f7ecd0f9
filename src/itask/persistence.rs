//! # Persistence
//!
//! Reads and writes the whole todo list as one JSON array under a single key of a
//! [`StorageBackend`]. There is no schema version and no migration: whatever is under
//! the key either parses as a list of items or is treated as an empty list.
//!
//! `load` never fails. A missing key, a backend read error, and unparseable or
//! wrong-shaped JSON all hydrate to `[]` (the latter two are logged at `warn`).
//! A record carrying both `text` and the legacy `todo` field is wrong-shaped.
//! Duplicate ids load as stored, with a `warn`.
//! `save` replaces the stored value wholesale and propagates storage failures.

use crate::error::{ItaskError, Result};
use crate::model::TodoItem;
use crate::store::StorageBackend;
use std::collections::HashSet;
use tracing::{debug, warn};

pub const DEFAULT_STORAGE_KEY: &str = "todos";

pub struct Persistence<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> Persistence<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn with_default_key(backend: B) -> Self {
        Self::new(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn load(&self) -> Vec<TodoItem> {
        let raw = match self.backend.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read stored todos, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<TodoItem>>(&raw) {
            Ok(items) => {
                let distinct = items.iter().map(|item| &item.id).collect::<HashSet<_>>().len();
                if distinct < items.len() {
                    warn!(
                        key = %self.key,
                        duplicates = items.len() - distinct,
                        "stored todos share ids, toggle and delete will act on every copy"
                    );
                }
                debug!(key = %self.key, count = items.len(), "loaded todos");
                items
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored todos are not a valid list, starting empty");
                Vec::new()
            }
        }
    }

    pub fn save(&self, items: &[TodoItem]) -> Result<()> {
        let content = serde_json::to_string(items).map_err(ItaskError::Serialization)?;
        self.backend.set_item(&self.key, &content)?;
        debug!(key = %self.key, count = items.len(), "saved todos");
        Ok(())
    }
}
