use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a todo item.
///
/// New ids are random UUIDs, but anything read back from storage is accepted
/// verbatim: the id is only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TodoId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: TodoId,
    // Records written by the browser build used `todo` for the text field.
    #[serde(alias = "todo")]
    pub text: String,
    pub is_completed: bool,
}

impl TodoItem {
    pub fn new(text: String) -> Self {
        Self {
            id: TodoId::generate(),
            text,
            is_completed: false,
        }
    }
}
