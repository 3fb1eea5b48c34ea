//! # Actions
//!
//! Every key press goes through `update()`. The mode decides which component
//! it reaches: the item list in List mode, the draft editor in Add mode.
//!
//! ```text
//! App + Key  →  update()  →  App' + Effect
//! ```
//!
//! No I/O here. Quitting is reported back as an `Effect` so the caller can
//! flush the file and leave the loop.

use log::debug;

use crate::core::key::Key;
use crate::core::state::{App, Mode};

/// Side effects the caller must perform after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Write the list back and stop processing events.
    Quit,
}

pub fn update(app: &mut App, key: Key) -> Effect {
    if key.is_quit() {
        debug!("Quit requested via {}", key.name());
        return Effect::Quit;
    }
    if key == Key::Tab {
        app.toggle_mode();
        debug!("Switched to {:?} mode", app.mode);
        return Effect::None;
    }
    match app.mode {
        Mode::List => handle_list_key(app, &key),
        Mode::Add => handle_add_key(app, &key),
    }
    Effect::None
}

fn handle_list_key(app: &mut App, key: &Key) {
    let items = &mut app.items;
    match key {
        Key::Up | Key::Char('k') => items.move_cursor_up(),
        Key::Down | Key::Char('j') => items.move_cursor_down(),
        Key::Enter | Key::Char(' ') => items.toggle_selected(),
        Key::Delete => {
            if let Some(removed) = items.delete_current() {
                debug!("Deleted todo {:?} ({} left)", removed, items.len());
            }
        }
        _ => {}
    }
}

fn handle_add_key(app: &mut App, key: &Key) {
    let editor = &mut app.editor;
    match key {
        Key::Left => editor.move_caret_left(),
        Key::Right => editor.move_caret_right(),
        Key::Enter => {
            if let Some(text) = editor.commit() {
                debug!("Added todo {:?}", text);
                app.items.append(text);
            }
        }
        Key::Backspace | Key::Delete => editor.delete_at_caret(),
        Key::Char(c) => {
            editor.insert_char(*c);
        }
        Key::Other(input) => {
            editor.insert(input);
        }
        _ => {}
    }
}
