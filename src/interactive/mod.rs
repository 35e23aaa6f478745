//! Interactive TUI mode
//!
//! Terminal front-end for playing the game.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
