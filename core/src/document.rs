// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Loading todo lists from external JSON or TOML documents.
//!
//! A document looks like:
//!
//! ```toml
//! title = "Today's Todos"
//!
//! [[items]]
//! title = "Buy milk"
//!
//! [[items]]
//! title = "Clean room"
//! done = true
//! ```
//!
//! Items are validated one by one, so a document mixing todos with other
//! values is rejected with [`TodoListError::TypeKind`].

use serde::ser::SerializeStruct;
use serde_json::Value;

use crate::{Todo, TodoList, TodoListError};

/// The title used when a document does not name its list.
pub const DEFAULT_TITLE: &str = "Todos";

const EXPECTED_TODO: &str = "a todo item with a string `title` and an optional boolean `done`";

/// A parsed, not yet validated, list document.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct TodoListDocument {
    /// The list title, if the document has one.
    #[serde(default)]
    pub title: Option<String>,

    /// The raw item values.
    #[serde(default)]
    pub items: Vec<Value>,
}

impl TodoListDocument {
    /// Parses a JSON document.
    pub fn from_json(s: &str) -> Result<Self, TodoListError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parses a TOML document.
    pub fn from_toml(s: &str) -> Result<Self, TodoListError> {
        Ok(toml::from_str(s)?)
    }

    /// Validates every item and builds the list, falling back to
    /// `default_title` when the document has no title.
    pub fn into_list(self, default_title: &str) -> Result<TodoList, TodoListError> {
        let title = self.title.unwrap_or_else(|| default_title.to_string());
        let mut list = TodoList::new(title);
        for (index, value) in self.items.into_iter().enumerate() {
            list.add_value(value).map_err(|e| match e {
                TodoListError::TypeKind { expected, found } => TodoListError::TypeKind {
                    expected,
                    found: format!("{found} at item {index}"),
                },
                e => e,
            })?;
        }
        Ok(list)
    }
}

impl TodoList {
    /// Appends an item given as untyped data.
    ///
    /// Only objects shaped like a [`Todo`] are accepted; anything else fails
    /// with [`TodoListError::TypeKind`] and leaves the list unchanged.
    pub fn add_value(&mut self, value: Value) -> Result<(), TodoListError> {
        let found = describe(&value);
        if !value.is_object() {
            return Err(type_kind(found));
        }

        let todo: Todo =
            serde_json::from_value(value).map_err(|e| type_kind(format!("{found} ({e})")))?;
        self.add(todo.into());
        Ok(())
    }

    /// Parses a JSON list document.
    pub fn from_json(s: &str) -> Result<Self, TodoListError> {
        TodoListDocument::from_json(s)?.into_list(DEFAULT_TITLE)
    }

    /// Parses a TOML list document.
    pub fn from_toml(s: &str) -> Result<Self, TodoListError> {
        TodoListDocument::from_toml(s)?.into_list(DEFAULT_TITLE)
    }

    /// Renders the list as a pretty-printed JSON document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl serde::Serialize for TodoList {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let items: Vec<&Todo> = self.iter().map(|todo| todo.as_ref()).collect();
        let mut state = serializer.serialize_struct("TodoList", 2)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("items", &items)?;
        state.end()
    }
}

fn type_kind(found: String) -> TodoListError {
    TodoListError::TypeKind {
        expected: EXPECTED_TODO,
        found,
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
