//! # Application State
//!
//! The whole document in one owned aggregate. No TUI types live here.
//!
//! ```text
//! App
//! ├── mode: Mode                // List or Add
//! ├── items: ItemStore          // to-dos, checks, row cursor
//! ├── editor: TextEditor        // draft buffer and caret
//! └── draft_policy: DraftPolicy // what leaving Add mode does to the draft
//! ```
//!
//! State changes only happen through `update(app, key)` in action.rs.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::editor::TextEditor;
use crate::core::items::ItemStore;

/// Which tab is active and therefore which component receives keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    List,
    Add,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::List => Mode::Add,
            Mode::Add => Mode::List,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::List => "Todos",
            Mode::Add => "Add Todos",
        }
    }
}

/// What happens to an unfinished draft when the user tabs away from Add mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DraftPolicy {
    /// Draft survives; tabbing back resumes composition.
    #[default]
    Keep,
    /// Draft is cleared on leaving Add mode.
    Discard,
}

#[derive(Debug, Clone, Default)]
pub struct App {
    pub mode: Mode,
    pub items: ItemStore,
    pub editor: TextEditor,
    pub draft_policy: DraftPolicy,
}

impl App {
    pub fn new(items: Vec<String>, draft_policy: DraftPolicy) -> Self {
        Self {
            mode: Mode::List,
            items: ItemStore::from_items(items),
            editor: TextEditor::new(),
            draft_policy,
        }
    }

    /// Flip between List and Add, applying the draft policy on the way out
    /// of Add mode.
    pub fn toggle_mode(&mut self) {
        if self.mode == Mode::Add && self.draft_policy == DraftPolicy::Discard {
            self.editor.clear();
        }
        self.mode = self.mode.toggled();
    }
}
