//! # Item Store
//!
//! The ordered to-do list, the set of checked rows, and the row cursor.
//!
//! ```text
//! ItemStore
//! ├── items: Vec<String>        // display order == insertion order
//! ├── selected: BTreeSet<usize> // checked rows, always valid indices
//! └── cursor: usize             // highlighted row (0 when empty)
//! ```
//!
//! Indices are positional. Deleting a row renumbers everything after it, so
//! the checked set is re-mapped to follow the same logical items (see
//! [`remove_at`]). Out-of-range requests are silently ignored.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<String>,
    selected: BTreeSet<usize>,
    cursor: usize,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from lines read off disk. Nothing is checked.
    pub fn from_items(items: Vec<String>) -> Self {
        Self {
            items,
            selected: BTreeSet::new(),
            cursor: 0,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    pub fn toggle_selected(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if !self.selected.remove(&self.cursor) {
            self.selected.insert(self.cursor);
        }
    }

    /// Remove the row under the cursor, keeping checks attached to their items.
    ///
    /// Returns the removed text, or `None` when the list is empty.
    pub fn delete_current(&mut self) -> Option<String> {
        if self.items.is_empty() {
            return None;
        }
        let removed = self.items.get(self.cursor).cloned();
        let (items, selected, cursor) = remove_at(
            std::mem::take(&mut self.items),
            &self.selected,
            self.cursor,
            self.cursor,
        );
        self.items = items;
        self.selected = selected;
        self.cursor = cursor;
        removed
    }

    pub fn append(&mut self, text: String) {
        self.items.push(text);
    }
}

/// Remove `target` from `items` and renumber the checked set to match.
///
/// Checked indices above `target` shift down by one; `target` itself loses its
/// check. The cursor lands on `max(cursor - 1, 0)` (it moves back one row even
/// when the removed row was not the cursor row, mirroring delete-under-cursor).
/// Removing the only item yields an empty store with the cursor at 0.
/// An out-of-range `target` returns the inputs unchanged.
pub fn remove_at(
    mut items: Vec<String>,
    selected: &BTreeSet<usize>,
    cursor: usize,
    target: usize,
) -> (Vec<String>, BTreeSet<usize>, usize) {
    if target >= items.len() {
        return (items, selected.clone(), cursor);
    }
    if items.len() == 1 {
        return (Vec::new(), BTreeSet::new(), 0);
    }

    items.remove(target);
    let selected: BTreeSet<usize> = selected
        .iter()
        .filter(|&&i| i != target && i <= items.len())
        .map(|&i| if i > target { i - 1 } else { i })
        .collect();
    let cursor = cursor.saturating_sub(1).min(items.len() - 1);

    (items, selected, cursor)
}
