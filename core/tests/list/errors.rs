// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Failing operations report the right error and leave the list untouched.

use serde_json::json;
use todolist_core::{TodoList, TodoListError};

use crate::common::{TodayFixture, assert_same_items, assert_statuses, today};

#[test]
fn item_at_out_of_range() {
    let TodayFixture { list, .. } = today();
    assert_eq!(
        list.item_at(5).unwrap_err(),
        TodoListError::OutOfRange { index: 5, size: 3 }
    );
    assert!(matches!(
        list.item_at(3),
        Err(TodoListError::OutOfRange { index: 3, .. })
    ));
}

#[test]
fn mark_done_at_out_of_range_mutates_nothing() {
    let TodayFixture {
        list,
        todo1,
        todo2,
        todo3,
    } = today();

    assert!(matches!(
        list.mark_done_at(6),
        Err(TodoListError::OutOfRange { .. })
    ));
    assert_statuses(&[&todo1, &todo2, &todo3], &[false, false, false]);
}

#[test]
fn mark_undone_at_out_of_range_mutates_nothing() {
    let TodayFixture {
        list,
        todo1,
        todo2,
        todo3,
    } = today();
    list.mark_all_done();

    assert!(matches!(
        list.mark_undone_at(6),
        Err(TodoListError::OutOfRange { .. })
    ));
    assert_statuses(&[&todo1, &todo2, &todo3], &[true, true, true]);
}

#[test]
fn remove_at_out_of_range_keeps_items() {
    let TodayFixture {
        mut list,
        todo1,
        todo2,
        todo3,
    } = today();

    assert!(matches!(
        list.remove_at(6),
        Err(TodoListError::OutOfRange { index: 6, size: 3 })
    ));
    assert_same_items(&list.to_vec(), &[&todo1, &todo2, &todo3]);
}

#[test]
fn add_value_rejects_non_todo_values() {
    let TodayFixture { mut list, .. } = today();

    assert!(matches!(
        list.add_value(json!(1)),
        Err(TodoListError::TypeKind { .. })
    ));
    assert!(matches!(
        list.add_value(json!("hi")),
        Err(TodoListError::TypeKind { .. })
    ));
    assert_eq!(list.size(), 3);
}

#[test]
fn mark_done_by_unknown_title_is_not_found() {
    let TodayFixture { list, .. } = today();
    assert_eq!(
        list.mark_done("Walk the dog"),
        Err(TodoListError::NotFound {
            title: "Walk the dog".to_string()
        })
    );
    assert!(list.all_done().is_empty());
}

#[test]
fn index_errors_on_empty_list() {
    let mut list = TodoList::new("Empty");
    assert!(list.item_at(0).is_err());
    assert!(list.mark_done_at(0).is_err());
    assert!(list.remove_at(0).is_err());
}
