//! Main loop controller: the per-frame cycle of input, network, and drawing
//!
//! One iteration per frame tick, in order:
//! 1. wait for the frame interval
//! 2. drain pending key presses through `update()`
//! 3. unless a modal entry is open, poll the connection once (bounded wait)
//! 4. draw, re-projecting if the width or transcript changed

use std::time::Duration;

use ratatui::DefaultTerminal;
use tokio::time::MissedTickBehavior;

use hbchat_app::{process_message, AppState, ConnectionStatus, Message, Settings};
use hbchat_core::prelude::*;
use hbchat_net::{Connection, Received};

use crate::{event, render, terminal};

/// Run the chat client on an established connection.
///
/// Owns the terminal for the duration of the call. On return the terminal is
/// restored first, then the connection is shut down.
pub async fn run(settings: &Settings, mut connection: Connection) -> Result<()> {
    let mut state = AppState::new(settings)?;
    info!(
        "Starting session with {} (transcript {} -> {} bytes, overflow {})",
        state.server_label,
        settings.transcript.initial_capacity,
        settings.transcript.grown_capacity,
        settings.transcript.overflow
    );

    let mut term = terminal::enter()?;

    let result = run_loop(&mut term, &mut state, &mut connection, settings)
        .await
        .context("Frame loop failed");

    terminal::leave();
    connection.shutdown().await;

    info!(
        "Session ended: {} sent, {} chunks received, transcript {} bytes",
        state.messages_sent,
        state.chunks_received,
        state.transcript.len()
    );
    result
}

async fn run_loop(
    term: &mut DefaultTerminal,
    state: &mut AppState,
    connection: &mut Connection,
    settings: &Settings,
) -> Result<()> {
    let mut frames = tokio::time::interval(settings.behavior.frame_interval());
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let poll_timeout = settings.network.poll_timeout();

    while !state.should_quit() {
        frames.tick().await;

        for msg in event::drain()? {
            process_message(state, msg, connection);
            if state.should_quit() {
                break;
            }
        }
        if state.should_quit() {
            break;
        }

        poll_network(state, connection, poll_timeout).await;

        term.draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(e.to_string()))?;
    }

    Ok(())
}

/// Poll the connection once and feed the outcome through `update()`.
///
/// Skipped while a modal entry is open or after the server has closed.
/// Returns `true` if anything was processed.
pub async fn poll_network(
    state: &mut AppState,
    connection: &mut Connection,
    timeout: Duration,
) -> bool {
    if state.is_modal() || state.connection == ConnectionStatus::Closed {
        return false;
    }

    let msg = match connection.try_receive(timeout).await {
        Ok(Received::Data(bytes)) => Message::Inbound(bytes),
        Ok(Received::Closed) => Message::PeerClosed,
        Ok(Received::Idle) => return false,
        Err(e) => Message::ReceiveFailed {
            reason: e.to_string(),
        },
    };

    process_message(state, msg, connection);
    true
}
