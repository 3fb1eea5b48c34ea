//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Effect, update};
use crate::core::key::Key;
use crate::core::state::{App, DraftPolicy};

/// Creates an App in List mode seeded with `items`.
pub fn app_with(items: &[&str]) -> App {
    App::new(
        items.iter().map(|s| s.to_string()).collect(),
        DraftPolicy::Keep,
    )
}

/// Sends one key by name.
pub fn press(app: &mut App, name: &str) -> Effect {
    update(app, Key::from_name(name))
}

/// Sends each char of `text` as its own key press.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        update(app, Key::Char(c));
    }
}
