//! # Core Application Logic
//!
//! The to-do list, the draft editor, and the key dispatcher.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (state)          │
//!                    │  • Key (input)          │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure.           │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │ todo_file  │
//!           │  Adapter   │              │ (startup / │
//!           │ (ratatui)  │              │   exit)    │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and `Mode`
//! - [`action`]: `update()` routes a `Key` to the list or the editor
//! - [`items`]: Ordered items, checks, and the row cursor
//! - [`editor`]: Draft buffer with a caret
//! - [`key`]: UI-agnostic key presses
//! - [`todo_file`]: Loading and atomically saving the backing file
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod editor;
pub mod items;
pub mod key;
pub mod state;
pub mod todo_file;
