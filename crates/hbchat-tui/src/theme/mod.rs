//! Colors and styles

pub mod palette;
