// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Translates top-level messages into component state changes and async
//! tasks. Component `Effect`s surface here so all side effects (image loads,
//! window teardown) stay in one place.

use super::{App, Message};
use crate::media::{self, PreloadOutcome};
use crate::ui::gallery;
use crate::ui::lightbox;
use iced::Task;

/// Handles a top-level message and returns any follow-up task.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(msg) => {
            let effect = app.gallery.handle(msg);
            handle_gallery_effect(app, effect)
        }
        Message::Lightbox(msg) => {
            let effect = app.lightbox.handle(msg);
            handle_lightbox_effect(app, effect)
        }
        Message::PreloadCompleted(outcome) => {
            handle_preload_completed(app, outcome);
            Task::none()
        }
        Message::Tick(_) => {
            app.gallery.handle(gallery::Message::AnimationTick);
            app.lightbox.handle(lightbox::Message::AnimationTick);
            Task::none()
        }
        Message::WindowResized(size) => {
            app.window_width = size.width;
            Task::none()
        }
        Message::WindowCloseRequested(id) => {
            // Close the lightbox first so scroll suppression is released on
            // every teardown path, then let the window actually close.
            app.lightbox.handle(lightbox::Message::Close);
            iced::window::close(id)
        }
    }
}

fn handle_gallery_effect(app: &mut App, effect: gallery::Effect) -> Task<Message> {
    match effect {
        gallery::Effect::None => Task::none(),
        gallery::Effect::OpenLightbox(index) => {
            let effect = app.lightbox.handle(lightbox::Message::Open(index));
            handle_lightbox_effect(app, effect)
        }
    }
}

fn handle_lightbox_effect(app: &mut App, effect: lightbox::Effect) -> Task<Message> {
    match effect {
        lightbox::Effect::None => Task::none(),
        lightbox::Effect::Closed => {
            tracing::debug!("lightbox closed, gallery scrolling restored");
            Task::none()
        }
        lightbox::Effect::RequestImage(index) => request_lightbox_image(app, index),
    }
}

/// Starts loading the full-size image for the open lightbox index.
///
/// The warm preload cache is consulted first; either way the result arrives
/// as a message, so `image_loaded` is observably false at open and flips only
/// when the load settles.
fn request_lightbox_image(app: &mut App, index: usize) -> Task<Message> {
    if let Some(image) = app.preloaded.get(index) {
        let image = image.clone();
        return Task::perform(async move { (index, Ok(image)) }, |(index, result)| {
            Message::Lightbox(lightbox::Message::ImageLoaded { index, result })
        });
    }

    let Some(descriptor) = app.catalog.get(index) else {
        return Task::none();
    };

    let path = descriptor.source_path.clone();
    Task::perform(media::load_image_async(path), move |(_, result)| {
        Message::Lightbox(lightbox::Message::ImageLoaded { index, result })
    })
}

/// Folds the settled preload batch into the warm cache and reports failures.
fn handle_preload_completed(app: &mut App, outcome: PreloadOutcome) {
    let loaded_count = outcome.loaded.len();
    for (index, image) in outcome.loaded {
        app.preloaded.insert(index, image);
    }

    if outcome.failures.is_empty() {
        tracing::info!(loaded = loaded_count, "preload batch complete");
    } else {
        for (index, error) in &outcome.failures {
            tracing::warn!(index, %error, "preload failed for catalog entry");
        }
        tracing::error!(
            loaded = loaded_count,
            failed = outcome.failures.len(),
            "preload batch finished with failures"
        );
    }
}
