// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use std::rc::Rc;

use todolist_core::TodoRef;

/// Asserts that `actual` holds exactly the `expected` handles, in order,
/// compared by identity rather than by value.
///
/// # Panics
///
/// Panics if the lengths differ or any position holds a different item.
pub fn assert_same_items(actual: &[TodoRef], expected: &[&TodoRef]) {
    assert_eq!(actual.len(), expected.len(), "item count mismatch");
    for (index, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            Rc::ptr_eq(a, e),
            "item {index} is {:?}, expected {:?}",
            a.title(),
            e.title()
        );
    }
}

/// Asserts the done flag of each handle.
///
/// # Panics
///
/// Panics if any item's status differs from the expectation.
pub fn assert_statuses(todos: &[&TodoRef], expected: &[bool]) {
    assert_eq!(todos.len(), expected.len(), "item count mismatch");
    for (todo, done) in todos.iter().zip(expected) {
        assert_eq!(todo.is_done(), *done, "status mismatch for {:?}", todo.title());
    }
}
