// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! An ordered, titled list of shared todo items.
//!
//! ```
//! use todolist_core::{Todo, TodoList};
//!
//! let mut list = TodoList::new("Today's Todos");
//! list.add(Todo::shared("Buy milk"));
//! list.add(Todo::shared("Clean room"));
//! list.mark_done_at(1)?;
//!
//! assert_eq!(list.to_string(), "---- Today's Todos ----\n[ ] Buy milk\n[X] Clean room");
//! # Ok::<(), todolist_core::TodoListError>(())
//! ```

mod document;
mod error;
mod list;
mod todo;

pub use crate::document::{DEFAULT_TITLE, TodoListDocument};
pub use crate::error::TodoListError;
pub use crate::list::TodoList;
pub use crate::todo::{Todo, TodoRef, TodoStatus};

/// The name of the application.
pub const APP_NAME: &str = "todolist";
