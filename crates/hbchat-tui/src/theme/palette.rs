//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const BACKGROUND: Color = Color::Rgb(0, 14, 224);
pub const POPUP_BG: Color = Color::Rgb(0, 10, 160);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Gray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_BRIGHT: Color = Color::White;
pub const ACCENT: Color = Color::Cyan;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::LightRed;
pub const STATUS_YELLOW: Color = Color::Yellow;
