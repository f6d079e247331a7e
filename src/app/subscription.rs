// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo viewer.

use super::Message;
use iced::{event, keyboard, Subscription};

/// Forwards key presses that no widget captured.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }),
            event::Status::Ignored,
        ) => Some(Message::KeyPressed { key, modifiers }),
        _ => None,
    })
}
