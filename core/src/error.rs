// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors returned by todo list operations.
///
/// A failing operation never leaves the list partially mutated.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoListError {
    /// The value is not a valid todo item.
    #[error("expected {expected}, found {found}")]
    TypeKind {
        /// What the operation accepts.
        expected: &'static str,
        /// A short description of the rejected value.
        found: String,
    },

    /// No item lives at the given index.
    #[error("index {index} is out of range for a list of {size} item(s)")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The list size at the time of the call.
        size: usize,
    },

    /// No item carries the given title.
    #[error("no todo titled {title:?}")]
    NotFound {
        /// The title that was looked up.
        title: String,
    },

    /// A list document could not be parsed.
    #[error("failed to parse todo list: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for TodoListError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<toml::de::Error> for TodoListError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
