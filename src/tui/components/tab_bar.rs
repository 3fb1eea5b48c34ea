//! # TabBar Component
//!
//! The header: both mode labels side by side, the active one in inverse
//! video, then a fixed-width rule.
//!
//! ```text
//!      Todos     |     Add Todos
//! -----------------------------------
//! ```
//!
//! Labels are padded with five spaces on each side so the highlight reads as
//! a tab rather than a word.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::Mode;
use crate::tui::component::Component;

/// Width of the rule under the tabs, in columns.
pub const HEADER_WIDTH: usize = 35;

const TAB_PADDING: &str = "     ";

pub struct TabBar {
    /// Currently active mode (Prop)
    pub mode: Mode,
}

impl TabBar {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    fn tab(&self, mode: Mode) -> Span<'static> {
        let text = format!("{TAB_PADDING}{}{TAB_PADDING}", mode.label());
        if self.mode == mode {
            Span::styled(text, Style::default().add_modifier(Modifier::REVERSED))
        } else {
            Span::raw(text)
        }
    }
}

impl Component for TabBar {
    fn lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(vec![self.tab(Mode::List), Span::raw("|"), self.tab(Mode::Add)]),
            Line::raw("-".repeat(HEADER_WIDTH)),
            Line::raw(""),
        ]
    }
}
