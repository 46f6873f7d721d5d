//! # hbchat-core - Core Domain Types
//!
//! Foundation crate for hbchat. Provides error handling, logging setup, the
//! chat transcript buffer, and the render projection used by every front end.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Transcript (`transcript`)
//! - [`TranscriptBuffer`] - Append-only chat history with a two-tier capacity
//! - [`OverflowPolicy`] - What to do once even the grown capacity is full
//! - [`CapacityTiers`] - Initial and grown capacity pair
//!
//! ### Projection (`projection`)
//! - [`project()`] - Word-wrap transcript content at a display width
//! - [`scroll()`] - Additive, unclamped scroll arithmetic
//!
//! ### Chat (`chat`)
//! - [`format_outgoing()`] - Build the `<username>: message` wire text
//! - [`EntryConstraints`] - Length and emptiness rules for text entry
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use hbchat_core::prelude::*;
//! ```

pub mod chat;
pub mod error;
pub mod logging;
pub mod projection;
pub mod transcript;

/// Prelude for common imports used throughout all hbchat crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use chat::{
    format_outgoing, EntryConstraints, OutgoingMessage, MAX_ENTRY_CHARS, MAX_OUTGOING_BYTES,
};
pub use error::{Error, Result, ResultExt};
pub use projection::{clamp_offset, offset_rows, project, scroll};
pub use transcript::{
    AppendOutcome, CapacityTiers, OverflowPolicy, TranscriptBuffer, DEFAULT_SEED,
    GROWN_CAPACITY_BYTES, INITIAL_CAPACITY_BYTES,
};
