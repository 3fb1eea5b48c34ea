//! # TodoList Component
//!
//! Body of the "Todos" tab: a prompt, then one row per item.
//!
//! ```text
//! What should I do?
//!
//!   [ ] buy milk
//! > [x] walk dog
//! ```

use ratatui::text::Line;

use crate::core::items::ItemStore;
use crate::tui::component::Component;

pub const PROMPT: &str = "What should I do?";
pub const EMPTY_PLACEHOLDER: &str = "There is currently nothing to do!!";

pub struct TodoList<'a> {
    pub items: &'a ItemStore,
}

impl<'a> TodoList<'a> {
    pub fn new(items: &'a ItemStore) -> Self {
        Self { items }
    }
}

/// One list row: cursor marker, checkbox, text.
pub fn row(is_cursor: bool, is_checked: bool, text: &str) -> String {
    let cursor = if is_cursor { '>' } else { ' ' };
    let checked = if is_checked { 'x' } else { ' ' };
    format!("{cursor} [{checked}] {text}")
}

impl Component for TodoList<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::raw(PROMPT), Line::raw("")];
        if self.items.is_empty() {
            lines.push(Line::raw(EMPTY_PLACEHOLDER));
            return lines;
        }
        let cursor = self.items.cursor();
        lines.extend(self.items.items().iter().enumerate().map(|(i, text)| {
            Line::raw(row(i == cursor, self.items.is_selected(i), text))
        }));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_rows_show_cursor_and_checks() {
        let mut store = ItemStore::from_items(vec!["buy milk".into(), "walk dog".into()]);
        store.move_cursor_down();
        store.toggle_selected();

        let lines = TodoList::new(&store).lines();
        assert_eq!(
            text(&lines),
            [PROMPT, "", "  [ ] buy milk", "> [x] walk dog"]
        );
    }

    #[test]
    fn test_empty_store_shows_placeholder() {
        let store = ItemStore::new();
        let lines = TodoList::new(&store).lines();
        assert_eq!(text(&lines), [PROMPT, "", EMPTY_PLACEHOLDER]);
    }
}
