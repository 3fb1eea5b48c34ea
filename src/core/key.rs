//! # Keys
//!
//! UI-agnostic key presses. The TUI adapter translates terminal events into
//! these; tests construct them directly or by name.
//!
//! Names follow the familiar terminal notation: `"ctrl+q"`, `"tab"`, `"up"`,
//! `"enter"`, `" "` for the space bar, and a bare character for printable
//! input.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    CtrlC,
    CtrlQ,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Backspace,
    Delete,
    Char(char),
    /// Anything else: function keys, other chords, pasted text.
    Other(String),
}

impl Key {
    pub fn from_name(name: &str) -> Self {
        match name {
            "ctrl+c" => Key::CtrlC,
            "ctrl+q" => Key::CtrlQ,
            "tab" => Key::Tab,
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "enter" => Key::Enter,
            "backspace" => Key::Backspace,
            "delete" => Key::Delete,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other(name.to_string()),
                }
            }
        }
    }

    pub fn name(&self) -> String {
        match self {
            Key::CtrlC => "ctrl+c".to_string(),
            Key::CtrlQ => "ctrl+q".to_string(),
            Key::Tab => "tab".to_string(),
            Key::Up => "up".to_string(),
            Key::Down => "down".to_string(),
            Key::Left => "left".to_string(),
            Key::Right => "right".to_string(),
            Key::Enter => "enter".to_string(),
            Key::Backspace => "backspace".to_string(),
            Key::Delete => "delete".to_string(),
            Key::Char(c) => c.to_string(),
            Key::Other(name) => name.clone(),
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Key::CtrlC | Key::CtrlQ)
    }
}
