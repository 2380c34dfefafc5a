// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard, window and timing events are translated into top-level messages
//! here. Navigation keys map straight to lightbox messages; the lightbox
//! itself guards them, so they are no-ops while the viewer is closed. The
//! subscription lives exactly as long as the event loop, which gives the
//! global key listener its acquire/release discipline for free.

use super::Message;
use crate::ui::lightbox;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Interval at which spinner and fade animations advance.
const ANIMATION_TICK: Duration = Duration::from_millis(100);

/// Creates the raw event subscription (keyboard and window events).
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        // Handle window close request for cleanup
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        if let event::Event::Window(iced::window::Event::Resized(size)) = &event {
            return Some(Message::WindowResized(*size));
        }

        // Keyboard navigation; only act on events no widget consumed
        if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = &event {
            return match status {
                event::Status::Ignored => match key {
                    keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                        Some(Message::Lightbox(lightbox::Message::Previous))
                    }
                    keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                        Some(Message::Lightbox(lightbox::Message::Next))
                    }
                    keyboard::Key::Named(keyboard::key::Named::Escape) => {
                        Some(Message::Lightbox(lightbox::Message::Close))
                    }
                    _ => None,
                },
                event::Status::Captured => None,
            };
        }

        None
    })
}

/// Creates a periodic tick subscription for spinner rotation and fades.
///
/// The subscription only exists while an animation is actually running, so
/// an idle gallery does not wake the event loop.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
