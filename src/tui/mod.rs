//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, draws the frame, and turns
//! crossterm events into `core::key::Key` values for `update()`.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Strictly one event at a time: draw, block on the next terminal event,
//! apply it, repeat. There is no timer and no background work, so the loop
//! only wakes up when the user does something. The quit chord ends the loop
//! with the terminal restored; writing the file back is the caller's job.

mod component;
pub mod components;
pub mod event;
pub mod render;
mod ui;

use log::{debug, info};
use ratatui::DefaultTerminal;

use crate::core::action::{Effect, update};
use crate::core::state::App;

/// Run the UI until the user quits. The terminal is restored on every exit
/// path, including I/O errors.
pub fn run(app: &mut App) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    info!("Terminal initialized");
    let result = event_loop(&mut terminal, app);
    ratatui::restore();
    info!("Terminal restored");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw_ui(f, app))?;

        let Some(key) = event::read_key()? else {
            continue;
        };
        debug!("Dispatching {} in {:?} mode", key.name(), app.mode);
        if update(app, key) == Effect::Quit {
            info!("Quit with {} todos", app.items.len());
            return Ok(());
        }
    }
}
