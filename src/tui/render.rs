//! # Renderer
//!
//! Maps an `App` to the full text frame: tab header, mode body, footer.
//! Pure: same state in, same frame out, nothing mutated.
//!
//! `frame()` is what the terminal draws. `frame_string()` and `to_ansi()`
//! flatten it for logs, tests, and non-ratatui output.

use ratatui::style::Modifier;
use ratatui::text::Text;

use crate::core::state::{App, Mode};
use crate::tui::component::Component;
use crate::tui::components::{AddForm, HelpBar, TabBar, TodoList};

const INVERSE_ON: &str = "\x1b[7m";
const INVERSE_OFF: &str = "\x1b[27m";

pub fn frame(app: &App) -> Text<'static> {
    let mut lines = TabBar::new(app.mode).lines();
    match app.mode {
        Mode::List => lines.extend(TodoList::new(&app.items).lines()),
        Mode::Add => lines.extend(AddForm::new(&app.editor).lines()),
    }
    lines.extend(HelpBar.lines());
    Text::from(lines)
}

/// The frame as plain text, one `\n`-terminated line per row.
pub fn frame_string(app: &App) -> String {
    let mut out = String::new();
    for line in frame(app).lines {
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

/// The frame with reversed spans wrapped in ANSI inverse-video escapes.
pub fn to_ansi(text: &Text) -> String {
    let mut out = String::new();
    for line in &text.lines {
        for span in &line.spans {
            if span.style.add_modifier.contains(Modifier::REVERSED) {
                out.push_str(INVERSE_ON);
                out.push_str(&span.content);
                out.push_str(INVERSE_OFF);
            } else {
                out.push_str(&span.content);
            }
        }
        out.push('\n');
    }
    out
}
