//! Terminal setup and restoration

use ratatui::DefaultTerminal;

use hbchat_core::prelude::*;

/// Take over the terminal: raw mode plus the alternate screen.
///
/// `ratatui::try_init` also chains a panic hook that restores the terminal,
/// so a panic mid-frame still hands the shell back in a usable state.
pub fn enter() -> Result<DefaultTerminal> {
    let term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    debug!("Terminal initialized");
    Ok(term)
}

/// Hand the terminal back to the shell
pub fn leave() {
    ratatui::restore();
    debug!("Terminal restored");
}
