// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};
use std::rc::Rc;
use std::slice;

use crate::{Todo, TodoListError, TodoRef, TodoStatus};

/// An ordered, titled list of todo items.
///
/// Items are held by shared handle, so the same [`Todo`] can appear in more
/// than one list. Index 0 is the oldest item unless the list was reordered.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    /// The title shown in the list header.
    pub title: String,

    items: Vec<TodoRef>,
}

impl TodoList {
    /// Creates an empty list with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Appends an item to the end of the list.
    pub fn add(&mut self, todo: TodoRef) {
        tracing::trace!(title = todo.title(), "adding todo");
        self.items.push(todo);
    }

    /// Inserts an item at the front of the list.
    pub fn unshift(&mut self, todo: TodoRef) {
        tracing::trace!(title = todo.title(), "unshifting todo");
        self.items.insert(0, todo);
    }

    /// The number of items in the list.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The first item, if any.
    pub fn first(&self) -> Option<&TodoRef> {
        self.items.first()
    }

    /// The last item, if any.
    pub fn last(&self) -> Option<&TodoRef> {
        self.items.last()
    }

    /// Removes and returns the first item, if any.
    pub fn shift(&mut self) -> Option<TodoRef> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Removes and returns the last item, if any.
    pub fn pop(&mut self) -> Option<TodoRef> {
        self.items.pop()
    }

    /// The item at `index`.
    pub fn item_at(&self, index: usize) -> Result<&TodoRef, TodoListError> {
        self.items.get(index).ok_or(TodoListError::OutOfRange {
            index,
            size: self.items.len(),
        })
    }

    /// Marks the item at `index` as done.
    pub fn mark_done_at(&self, index: usize) -> Result<(), TodoListError> {
        self.item_at(index)?.mark_done();
        Ok(())
    }

    /// Marks the item at `index` as not done.
    pub fn mark_undone_at(&self, index: usize) -> Result<(), TodoListError> {
        self.item_at(index)?.mark_undone();
        Ok(())
    }

    /// Marks every item as done.
    pub fn mark_all_done(&self) {
        self.items.iter().for_each(|todo| todo.mark_done());
    }

    /// Marks every item as not done.
    pub fn mark_all_undone(&self) {
        self.items.iter().for_each(|todo| todo.mark_undone());
    }

    /// Whether every item is done. An empty list is done.
    pub fn is_done(&self) -> bool {
        self.items.iter().all(|todo| todo.is_done())
    }

    /// Removes and returns the item at `index`, shifting later items down.
    pub fn remove_at(&mut self, index: usize) -> Result<TodoRef, TodoListError> {
        self.item_at(index)?;
        tracing::trace!(index, "removing todo");
        Ok(self.items.remove(index))
    }

    /// The first item with the given title, if any.
    pub fn find_by_title(&self, title: &str) -> Option<&TodoRef> {
        self.items.iter().find(|todo| todo.title() == title)
    }

    /// The first item with the given title, or `NotFound` when there is none.
    pub fn find(&self, title: &str) -> Result<&TodoRef, TodoListError> {
        self.find_by_title(title)
            .ok_or_else(|| TodoListError::NotFound {
                title: title.to_string(),
            })
    }

    /// Marks the first item with the given title as done.
    pub fn mark_done(&self, title: &str) -> Result<(), TodoListError> {
        self.find(title)?.mark_done();
        Ok(())
    }

    /// Marks the first item with the given title as not done.
    pub fn mark_undone(&self, title: &str) -> Result<(), TodoListError> {
        self.find(title)?.mark_undone();
        Ok(())
    }

    /// A shallow copy of the item handles, in list order.
    pub fn to_vec(&self) -> Vec<TodoRef> {
        self.items.clone()
    }

    /// Iterates over the item handles in list order.
    pub fn iter(&self) -> slice::Iter<'_, TodoRef> {
        self.items.iter()
    }

    /// Calls `visitor` once per item, in list order.
    pub fn for_each(&self, visitor: impl FnMut(&TodoRef)) {
        self.items.iter().for_each(visitor);
    }

    /// A new list with the same title holding the items for which
    /// `predicate` returns true. Items are shared, not copied.
    pub fn filter(&self, mut predicate: impl FnMut(&Todo) -> bool) -> TodoList {
        TodoList {
            title: self.title.clone(),
            items: self
                .items
                .iter()
                .filter(|todo| predicate(todo))
                .map(Rc::clone)
                .collect(),
        }
    }

    /// The done items, as a new list.
    pub fn all_done(&self) -> TodoList {
        self.filter(|todo| TodoStatus::Done.matches(todo))
    }

    /// The items not yet done, as a new list.
    pub fn all_not_done(&self) -> TodoList {
        self.filter(|todo| TodoStatus::Undone.matches(todo))
    }
}

impl Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "---- {} ----", self.title)?;
        for todo in &self.items {
            write!(f, "\n{todo}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoRef;
    type IntoIter = slice::Iter<'a, TodoRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Extend<TodoRef> for TodoList {
    fn extend<I: IntoIterator<Item = TodoRef>>(&mut self, iter: I) {
        iter.into_iter().for_each(|todo| self.add(todo));
    }
}
