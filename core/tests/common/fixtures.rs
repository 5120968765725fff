// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use todolist_core::{Todo, TodoList, TodoRef};

/// Title of the list built by [`today`].
pub const TODAY_TITLE: &str = "Today's Todos";

/// A three-item list together with handles to its items.
pub struct TodayFixture {
    pub todo1: TodoRef,
    pub todo2: TodoRef,
    pub todo3: TodoRef,
    pub list: TodoList,
}

/// Creates "Today's Todos" holding "Buy milk", "Clean room" and
/// "Go to the gym", all undone.
///
/// # Example
///
/// ```ignore
/// let TodayFixture { list, todo1, .. } = today();
/// ```
#[must_use]
pub fn today() -> TodayFixture {
    let todo1 = Todo::shared("Buy milk");
    let todo2 = Todo::shared("Clean room");
    let todo3 = Todo::shared("Go to the gym");

    let mut list = TodoList::new(TODAY_TITLE);
    list.add(todo1.clone());
    list.add(todo2.clone());
    list.add(todo3.clone());

    TodayFixture {
        todo1,
        todo2,
        todo3,
        list,
    }
}
