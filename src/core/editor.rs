//! # Text Editor
//!
//! Draft buffer for composing a new to-do. The caret is a `char` index into
//! the buffer (`0..=len`), not a byte offset, so multi-byte input moves it by
//! exactly one position.

use unicode_general_category::{GeneralCategory, get_general_category};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEditor {
    buffer: Vec<char>,
    caret: usize,
}

impl TextEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Current draft as a string.
    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Draft up to (not including) the caret.
    pub fn text_before_caret(&self) -> String {
        self.buffer[..self.caret].iter().collect()
    }

    pub fn move_caret_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_caret_right(&mut self) {
        if self.caret < self.buffer.len() {
            self.caret += 1;
        }
    }

    /// Insert `input` at the caret if it is exactly one printable character.
    ///
    /// Key names such as `"tab"` or pasted text arrive here as multi-char
    /// strings and are dropped, as are non-printable characters. Returns
    /// whether the buffer changed.
    pub fn insert(&mut self, input: &str) -> bool {
        let mut chars = input.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return false;
        };
        self.insert_char(c)
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        if !is_printable(c) {
            return false;
        }
        self.buffer.insert(self.caret, c);
        self.caret += 1;
        true
    }

    /// Erase one character.
    ///
    /// At the end of the buffer this behaves like backspace (removes the last
    /// char). Anywhere else it removes the char under the caret, then steps
    /// the caret back unless it is already at 0.
    pub fn delete_at_caret(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        if self.caret == self.buffer.len() {
            self.buffer.pop();
            self.caret -= 1;
            return;
        }
        self.buffer.remove(self.caret);
        self.caret = self.caret.saturating_sub(1);
    }

    /// Take the draft, stripped of trailing spaces, and reset the editor.
    ///
    /// Returns `None` for an empty buffer. A draft made only of spaces commits
    /// as an empty string.
    pub fn commit(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let text = self.text().trim_end_matches(' ').to_string();
        self.clear();
        Some(text)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.caret = 0;
    }
}

/// Letters, marks, numbers, punctuation, symbols, and plain spaces.
///
/// Controls, format characters (zero-width, bidi overrides, BOM, soft
/// hyphen), line/paragraph separators, private use, surrogates and
/// unassigned code points are rejected.
pub fn is_printable(c: char) -> bool {
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::PrivateUse
            | GeneralCategory::Surrogate
            | GeneralCategory::Unassigned
    )
}
