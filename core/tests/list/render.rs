// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Text rendering of a list.

use todolist_core::TodoList;

use crate::common::{TodayFixture, today};

#[test]
fn renders_header_and_items() {
    let TodayFixture { list, .. } = today();
    let expected = "\
---- Today's Todos ----
[ ] Buy milk
[ ] Clean room
[ ] Go to the gym";

    assert_eq!(list.to_string(), expected);
}

#[test]
fn renders_done_item_with_x() {
    let TodayFixture { list, .. } = today();
    list.mark_done_at(1).unwrap();
    let expected = "\
---- Today's Todos ----
[ ] Buy milk
[X] Clean room
[ ] Go to the gym";

    assert_eq!(list.to_string(), expected);
}

#[test]
fn renders_all_done_items() {
    let TodayFixture { list, .. } = today();
    list.mark_all_done();
    let expected = "\
---- Today's Todos ----
[X] Buy milk
[X] Clean room
[X] Go to the gym";

    assert_eq!(list.to_string(), expected);
}

#[test]
fn renders_empty_list_as_header_only() {
    let list = TodoList::new("Nothing");
    assert_eq!(list.to_string(), "---- Nothing ----");
}

#[test]
fn has_no_trailing_newline() {
    let TodayFixture { list, .. } = today();
    assert!(!list.to_string().ends_with('\n'));
}
