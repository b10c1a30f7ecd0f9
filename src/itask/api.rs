//! # API Facade
//!
//! The API layer is a **thin facade** over [`TodoStore`]. It is the single entry point
//! for UI clients.
//!
//! The facade:
//! - **Resolves display indexes** (`1`, `2-4`) to todo ids, all of them before any
//!   mutation
//! - **Dispatches** to the store operations
//! - **Returns structured types** (`Result<CmdResult>`) with user-facing messages
//!
//! It never prints. Rejected input (too short) is a warning message, not an error;
//! a bad or out-of-range index is an `Api` error, as is an edit that could only end
//! with the item gone.
//!
//! `TodoApi<B: StorageBackend>` is generic over the backend so the whole facade can
//! be exercised against `MemBackend`.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ItaskError, Result};
use crate::index::{index_todos, parse_indexes, resolve_indexes, DisplayIndex};
use crate::model::{TodoId, TodoItem};
use crate::store::StorageBackend;
use crate::todo_store::{is_acceptable, TodoStore, MIN_TEXT_LEN};
use std::str::FromStr;

pub use crate::commands::MessageLevel;

pub struct TodoApi<B: StorageBackend> {
    store: TodoStore<B>,
}

impl<B: StorageBackend> TodoApi<B> {
    pub fn new(store: TodoStore<B>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TodoStore<B> {
        &self.store
    }

    pub fn list(&self) -> CmdResult {
        let mut result = CmdResult::default().with_listed_todos(index_todos(self.store.todos()));
        if result.listed_todos.is_empty() {
            result.add_message(CmdMessage::info("No todos to display"));
        }
        result
    }

    pub fn add(&mut self, text: impl Into<String>) -> Result<CmdResult> {
        self.store.set_pending_input(text);
        let mut result = CmdResult::default();

        if self.store.add()? {
            if let Some(added) = self.last_todo() {
                result.add_message(CmdMessage::success(format!("Added: {}", added.text)));
                result.affected_todos.push(added);
            }
        } else {
            result.add_message(short_input_warning());
        }
        Ok(result)
    }

    pub fn toggle<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<CmdResult> {
        let resolved = self.resolve(indexes)?;
        let mut result = CmdResult::default();

        for (display_index, id) in resolved {
            self.store.toggle_completed(&id)?;
            if let Some(todo) = self.store.get(&id).cloned() {
                let verb = if todo.is_completed {
                    "Completed"
                } else {
                    "Reopened"
                };
                result.add_message(CmdMessage::success(format!(
                    "{} ({}): {}",
                    verb, display_index, todo.text
                )));
                result.affected_todos.push(todo);
            }
        }
        Ok(result)
    }

    pub fn delete<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<CmdResult> {
        let resolved = self.resolve(indexes)?;
        let mut result = CmdResult::default();

        for (display_index, id) in resolved {
            let removed = self.store.get(&id).cloned();
            self.store.delete(&id)?;
            if let Some(todo) = removed {
                result.add_message(CmdMessage::success(format!(
                    "Deleted ({}): {}",
                    display_index, todo.text
                )));
                result.affected_todos.push(todo);
            }
        }
        Ok(result)
    }

    /// Edits the item at `index`: its text goes back into the pending input, the item
    /// is removed, and the input (replaced by `new_text` if given) is added again.
    ///
    /// If the replacement is too short the original text is re-added instead. When
    /// neither text could be re-added the edit is refused before anything is removed.
    pub fn edit(&mut self, index: &str, new_text: Option<String>) -> Result<CmdResult> {
        let index = DisplayIndex::from_str(index).map_err(ItaskError::Api)?;
        let (display_index, id) = resolve_indexes(self.store.todos(), &[index])?.remove(0);
        let original = match self.store.get(&id) {
            Some(todo) => todo.text.clone(),
            None => return Ok(CmdResult::default()),
        };
        let mut result = CmdResult::default();

        let replacement = match new_text {
            Some(text) if is_acceptable(&text) => text,
            Some(_) if is_acceptable(&original) => {
                result.add_message(short_input_warning());
                result.add_message(CmdMessage::info(format!(
                    "Kept original text: {}",
                    original
                )));
                original
            }
            None if is_acceptable(&original) => original,
            _ => {
                return Err(ItaskError::Api(format!(
                    "Cannot edit ({}): todos must be longer than {} characters",
                    display_index, MIN_TEXT_LEN
                )))
            }
        };

        if !self.store.start_edit(&id)? {
            return Ok(result);
        }
        self.store.set_pending_input(replacement);
        self.store.add()?;

        if let Some(edited) = self.last_todo() {
            result.add_message(CmdMessage::success(format!(
                "Updated ({}): {}",
                display_index, edited.text
            )));
            result.affected_todos.push(edited);
        }
        Ok(result)
    }

    pub fn pending_input(&self) -> &str {
        self.store.pending_input()
    }

    pub fn storage_path(&self) -> CmdResult {
        let persistence = self.store.persistence();
        CmdResult::default().with_paths(vec![persistence.backend().item_path(persistence.key())])
    }

    fn resolve<I: AsRef<str>>(
        &self,
        inputs: &[I],
    ) -> Result<Vec<(DisplayIndex, TodoId)>> {
        let indexes = parse_indexes(inputs, self.store.todos().len())?;
        resolve_indexes(self.store.todos(), &indexes)
    }

    fn last_todo(&self) -> Option<TodoItem> {
        self.store.todos().last().cloned()
    }
}

fn short_input_warning() -> CmdMessage {
    CmdMessage::warning(format!(
        "Todo must be longer than {} characters, nothing saved",
        MIN_TEXT_LEN
    ))
}
