//! # Todo Store
//!
//! [`TodoStore`] owns the authoritative list and the pending input, and keeps the
//! persisted copy in lockstep with memory.
//!
//! ## Write-through
//!
//! Every operation that touches the list ends with exactly one full-list
//! [`Persistence::save`]. The mutation happens in memory first and the write is always
//! the last step. If the write fails the error is returned and memory keeps the
//! mutation; since writes are never incremental, the next successful write brings
//! storage back in line.
//!
//! | operation          | list change                       | writes            |
//! |--------------------|-----------------------------------|-------------------|
//! | `set_pending_input`| none                              | 0                 |
//! | `add`              | append (if trimmed input > 3)     | 1, or 0 if reject |
//! | `delete`           | remove match, if any              | 1                 |
//! | `start_edit`       | remove match, input := its text   | 1, or 0 if miss   |
//! | `toggle_completed` | flip match, if any                | 1                 |
//!
//! ## Edit
//!
//! There is no update-in-place. Editing moves the item's text back into the pending
//! input and removes the item; re-adding it gives it a new id at the end of the list.

use crate::error::Result;
use crate::model::{TodoId, TodoItem};
use crate::persistence::Persistence;
use crate::store::StorageBackend;
use tracing::debug;

/// Inputs whose trimmed length is at or below this are not accepted by `add`.
pub const MIN_TEXT_LEN: usize = 3;

/// Whether `text` would be accepted as a new todo: longer than [`MIN_TEXT_LEN`]
/// characters once leading and trailing whitespace is trimmed.
pub fn is_acceptable(text: &str) -> bool {
    text.trim().chars().count() > MIN_TEXT_LEN
}

pub struct TodoStore<B: StorageBackend> {
    todos: Vec<TodoItem>,
    pending_input: String,
    persistence: Persistence<B>,
}

impl<B: StorageBackend> TodoStore<B> {
    /// Hydrates the list from `persistence`.
    pub fn new(persistence: Persistence<B>) -> Self {
        let todos = persistence.load();
        Self {
            todos,
            pending_input: String::new(),
            persistence,
        }
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|item| &item.id == id)
    }

    pub fn persistence(&self) -> &Persistence<B> {
        &self.persistence
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Whether the current pending input would be accepted by `add`.
    pub fn can_add(&self) -> bool {
        is_acceptable(&self.pending_input)
    }

    /// Commits the pending input as a new item.
    ///
    /// Returns `Ok(false)` without touching anything when the input is too short.
    /// The text is stored as typed, untrimmed.
    pub fn add(&mut self) -> Result<bool> {
        if !self.can_add() {
            debug!(len = self.pending_input.len(), "add rejected, input too short");
            return Ok(false);
        }

        let item = TodoItem::new(self.pending_input.clone());
        debug!(id = %item.id, "adding todo");
        self.todos.push(item);
        self.persist()?;
        self.pending_input.clear();
        Ok(true)
    }

    pub fn delete(&mut self, id: &TodoId) -> Result<()> {
        self.remove(id);
        self.persist()
    }

    /// Moves the item's text into the pending input and removes the item.
    ///
    /// Returns `Ok(false)` and leaves everything untouched when `id` is unknown.
    pub fn start_edit(&mut self, id: &TodoId) -> Result<bool> {
        let Some(text) = self.get(id).map(|item| item.text.clone()) else {
            debug!(%id, "edit ignored, no such todo");
            return Ok(false);
        };

        self.pending_input = text;
        self.remove(id);
        self.persist()?;
        Ok(true)
    }

    /// Flips every item carrying `id`, matching `delete`, which removes every one.
    pub fn toggle_completed(&mut self, id: &TodoId) -> Result<()> {
        for item in self.todos.iter_mut().filter(|item| &item.id == id) {
            item.is_completed = !item.is_completed;
            debug!(%id, completed = item.is_completed, "toggled todo");
        }
        self.persist()
    }

    fn remove(&mut self, id: &TodoId) {
        let before = self.todos.len();
        self.todos.retain(|item| &item.id != id);
        debug!(%id, removed = before - self.todos.len(), "removed todo");
    }

    fn persist(&self) -> Result<()> {
        self.persistence.save(&self.todos)
    }
}
