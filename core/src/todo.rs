// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::Cell;
use std::fmt::{self, Display};
use std::rc::Rc;
use std::str::FromStr;

/// Shared handle to a todo item.
///
/// A single item may live in several lists at once; marking it done through
/// one handle is visible through every other handle.
pub type TodoRef = Rc<Todo>;

/// A single task with a title and a done/undone status.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Todo {
    title: String,

    #[serde(default)]
    done: Cell<bool>,
}

impl Todo {
    /// Creates a new, undone todo item.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: Cell::new(false),
        }
    }

    /// Creates a new, undone todo item behind a shared handle.
    pub fn shared(title: impl Into<String>) -> TodoRef {
        Rc::new(Self::new(title))
    }

    /// The title of the todo item.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Marks the todo item as done.
    pub fn mark_done(&self) {
        self.done.set(true);
    }

    /// Marks the todo item as not done.
    pub fn mark_undone(&self) {
        self.done.set(false);
    }

    /// Whether the todo item is done.
    pub fn is_done(&self) -> bool {
        self.done.get()
    }

    /// The current status of the todo item.
    pub fn status(&self) -> TodoStatus {
        self.is_done().into()
    }
}

impl Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status().marker(), self.title)
    }
}

/// The status of a todo item.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum TodoStatus {
    /// The todo item still needs action.
    #[default]
    Undone,

    /// The todo item has been completed.
    Done,
}

const STATUS_UNDONE: &str = "undone";
const STATUS_DONE: &str = "done";

impl TodoStatus {
    /// The checkbox marker used when rendering a todo item.
    pub fn marker(self) -> &'static str {
        match self {
            TodoStatus::Undone => "[ ]",
            TodoStatus::Done => "[X]",
        }
    }

    /// Whether the given todo item has this status.
    pub fn matches(self, todo: &Todo) -> bool {
        todo.status() == self
    }
}

impl From<bool> for TodoStatus {
    fn from(done: bool) -> Self {
        if done {
            TodoStatus::Done
        } else {
            TodoStatus::Undone
        }
    }
}

impl AsRef<str> for TodoStatus {
    fn as_ref(&self) -> &str {
        match self {
            TodoStatus::Undone => STATUS_UNDONE,
            TodoStatus::Done => STATUS_DONE,
        }
    }
}

impl Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for TodoStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            STATUS_UNDONE => Ok(TodoStatus::Undone),
            STATUS_DONE => Ok(TodoStatus::Done),
            _ => Err(()),
        }
    }
}
