//! # HelpBar Component
//!
//! Footer naming the quit chord. Stateless and identical in both modes.

use ratatui::text::Line;

use crate::tui::component::Component;

pub const QUIT_HINT: &str = "Press `ctrl+q` to quit";

pub struct HelpBar;

impl Component for HelpBar {
    fn lines(&self) -> Vec<Line<'static>> {
        vec![Line::raw(""), Line::raw(QUIT_HINT)]
    }
}
