//! Widgets for the chat screen

mod entry_modal;
mod header;
mod status_bar;
mod transcript_view;

pub use entry_modal::{centered_rect, EntryModal};
pub use header::Header;
pub use status_bar::StatusBar;
pub use transcript_view::TranscriptView;
