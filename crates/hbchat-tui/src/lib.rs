//! hbchat-tui - Terminal UI for hbchat
//!
//! The ratatui/crossterm front end: key polling, layout, widgets, and the
//! frame loop that drives `hbchat-app` against an `hbchat-net` connection.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
