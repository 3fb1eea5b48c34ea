//! # AddForm Component
//!
//! Body of the "Add Todos" tab: the draft after an `Input: ` label, and a
//! `^` marker on the line below pointing at the caret.
//!
//! ```text
//! Add a new todo:
//!
//! Input: buy mlk
//!                ^
//! Press `enter` to add todo
//! ```
//!
//! The marker column is measured in display width, so wide characters before
//! the caret push it by two columns rather than one.

use ratatui::text::Line;
use unicode_width::UnicodeWidthStr;

use crate::core::editor::TextEditor;
use crate::tui::component::Component;

pub const PROMPT: &str = "Add a new todo:";
pub const INPUT_LABEL: &str = "Input: ";
pub const COMMIT_HINT: &str = "Press `enter` to add todo";

pub struct AddForm<'a> {
    pub editor: &'a TextEditor,
}

impl<'a> AddForm<'a> {
    pub fn new(editor: &'a TextEditor) -> Self {
        Self { editor }
    }

    /// Column of the `^` marker.
    pub fn caret_column(&self) -> usize {
        INPUT_LABEL.width() + self.editor.text_before_caret().width()
    }
}

impl Component for AddForm<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::raw(PROMPT),
            Line::raw(""),
            Line::raw(format!("{INPUT_LABEL}{}", self.editor.text())),
            Line::raw(format!("{}^", " ".repeat(self.caret_column()))),
        ];
        if !self.editor.is_empty() {
            lines.push(Line::raw(COMMIT_HINT));
        }
        lines
    }
}
