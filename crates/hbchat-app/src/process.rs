//! Message processing: runs the TEA update loop and executes its actions

use std::collections::VecDeque;

use hbchat_core::prelude::*;
use hbchat_net::Connection;

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Where outbound chat bytes go
#[cfg_attr(test, mockall::automock)]
pub trait OutboundSink {
    /// Best-effort send of the whole buffer
    fn send(&mut self, bytes: &[u8]) -> Result<usize>;
}

impl OutboundSink for Connection {
    fn send(&mut self, bytes: &[u8]) -> Result<usize> {
        self.try_send(bytes)
    }
}

/// Process a message through the TEA update function.
///
/// Follow-up messages and action outcomes are fed back until none remain.
pub fn process_message<S>(state: &mut AppState, message: Message, sink: &mut S)
where
    S: OutboundSink + ?Sized,
{
    let mut queue = VecDeque::from([message]);

    while let Some(msg) = queue.pop_front() {
        let result = handler::update(state, msg);

        if let Some(follow_up) = result.message {
            queue.push_back(follow_up);
        }
        if let Some(action) = result.action {
            queue.push_back(handle_action(action, sink));
        }
    }
}

fn handle_action<S>(action: UpdateAction, sink: &mut S) -> Message
where
    S: OutboundSink + ?Sized,
{
    match action {
        UpdateAction::Send(outgoing) => match sink.send(outgoing.as_bytes()) {
            Ok(bytes) => Message::Sent { bytes },
            Err(e) => Message::SendFailed {
                reason: e.to_string(),
            },
        },
    }
}
