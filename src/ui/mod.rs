//! UI module - terminal front end for a single pet

pub mod state;
pub mod terminal;

pub use state::{GameUI, LogEntry};
pub use terminal::TerminalOptions;
