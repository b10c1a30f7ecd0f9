//! # Display Indexes
//!
//! Todo ids are opaque UUID strings, which nobody wants to type. Clients address
//! items by their 1-based position in the rendered list instead: `1` is the first
//! item, `2` the second, and so on. Ranges (`2-4`) expand to every index in between.
//!
//! Indexes are only meaningful against the list they were rendered from. The API
//! resolves all of them to ids *before* mutating anything, so `itask delete 1 2`
//! removes the items the user saw as 1 and 2, not whatever slides into slot 2 after
//! the first removal.

use crate::error::{ItaskError, Result};
use crate::model::{TodoId, TodoItem};
use std::collections::HashSet;
use std::str::FromStr;

/// A user-facing, 1-based position in the todo list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(0) => Err("Index must start at 1".to_string()),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid index format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTodo {
    pub todo: TodoItem,
    pub index: DisplayIndex,
}

/// Assigns display indexes in list order.
pub fn index_todos(todos: &[TodoItem]) -> Vec<DisplayTodo> {
    todos
        .iter()
        .enumerate()
        .map(|(i, todo)| DisplayTodo {
            todo: todo.clone(),
            index: DisplayIndex(i + 1),
        })
        .collect()
}

/// Parses a single input string that may be either a single index or a range.
///
/// - Single index: "3"
/// - Range: "3-5" (expands to 3, 4, 5). Start must be <= end.
///
/// Anything past `len` (the length of the listed todos) is rejected before a range
/// is expanded.
pub fn parse_index_or_range(
    s: &str,
    len: usize,
) -> std::result::Result<Vec<DisplayIndex>, String> {
    let (start, end) = match s.split_once('-') {
        Some((start, end)) => (DisplayIndex::from_str(start)?, DisplayIndex::from_str(end)?),
        None => {
            let idx = DisplayIndex::from_str(s)?;
            (idx, idx)
        }
    };

    if start > end {
        return Err(format!(
            "Invalid range: start ({}) must be <= end ({})",
            start, end
        ));
    }
    if end.0 > len {
        return Err(format!("Index {} not found", end));
    }
    Ok((start.0..=end.0).map(DisplayIndex).collect())
}

/// Parses every input against a list of `len` todos, expanding ranges.
/// Duplicates keep their first position.
pub fn parse_indexes<I: AsRef<str>>(inputs: &[I], len: usize) -> Result<Vec<DisplayIndex>> {
    let mut seen: HashSet<DisplayIndex> = HashSet::new();
    let mut result: Vec<DisplayIndex> = Vec::new();
    for input in inputs {
        let parsed = parse_index_or_range(input.as_ref(), len).map_err(ItaskError::Api)?;
        for idx in parsed {
            if seen.insert(idx) {
                result.push(idx);
            }
        }
    }
    Ok(result)
}

/// Maps display indexes to the ids they point at in `todos`.
///
/// Fails on the first index past the end of the list.
pub fn resolve_indexes(
    todos: &[TodoItem],
    indexes: &[DisplayIndex],
) -> Result<Vec<(DisplayIndex, TodoId)>> {
    indexes
        .iter()
        .map(|idx| {
            idx.0
                .checked_sub(1)
                .and_then(|i| todos.get(i))
                .map(|todo| (*idx, todo.id.clone()))
                .ok_or_else(|| ItaskError::Api(format!("Index {} not found", idx)))
        })
        .collect()
}
