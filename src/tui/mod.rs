//! Terminal user interface.
//!
//! Ratatui-based list and detail views driven by a single message loop:
//! terminal input, tick timer, and fetch results all arrive as
//! [`Message`]s, and [`event::update`] is the only place application
//! state changes.

pub mod app;
pub mod components;
pub mod event;
pub mod terminal;
pub mod ui;
pub mod views;

pub use app::{App, View};
pub use event::{Action, Event, Message, update};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
