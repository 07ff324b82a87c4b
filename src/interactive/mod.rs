//! Interactive TUI interface
//!
//! Terminal front end built on ratatui and crossterm. It holds no game rules:
//! key presses become submissions to the session and the round is redrawn.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
pub use rendering::ui;
