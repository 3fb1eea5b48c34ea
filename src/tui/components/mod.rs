//! # TUI Components
//!
//! The pieces the frame is assembled from, top to bottom:
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── tab_bar.rs    (mode tabs + rule)
//! ├── todo_list.rs  (List mode body)
//! ├── add_form.rs   (Add mode body)
//! └── help_bar.rs   (footer)
//! ```
//!
//! All of them are stateless: props in, lines out. Which body is shown is
//! decided by `render::frame`.

pub mod add_form;
pub mod help_bar;
pub mod tab_bar;
pub mod todo_list;

pub use add_form::AddForm;
pub use help_bar::HelpBar;
pub use tab_bar::TabBar;
pub use todo_list::TodoList;
