// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the catalog, the thumbnail grid, the
//! lightbox viewer and the preload cache, and translates component effects
//! into side effects like image loading. Policy decisions (window sizing,
//! preload enablement, theming) stay close to the main update loop so
//! user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::Catalog;
use crate::i18n::I18n;
use crate::media::{self, PreloadedSet};
use crate::ui::gallery;
use crate::ui::lightbox;
use crate::ui::theming::ThemeMode;
use config::BackgroundTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Default directory holding the numbered gallery images, relative to the
/// working directory, when `--assets-dir` is not given.
const DEFAULT_ASSETS_DIR: &str = "assets";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// The fixed image catalog.
    catalog: Catalog,
    /// Thumbnail grid state.
    gallery: gallery::State,
    /// Lightbox viewer state.
    lightbox: lightbox::State,
    /// Warm cache filled by the startup preload batch.
    preloaded: PreloadedSet,
    /// Current window width, drives the grid column count.
    window_width: f32,
    /// Widget theme mode from config.
    theme_mode: ThemeMode,
    /// Gallery page background from config.
    background_theme: BackgroundTheme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("catalog_len", &self.catalog.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .field("preloaded", &self.preloaded.loaded_count())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the thumbnail loads and,
    /// when enabled, the preload batch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning_key) = config_warning {
            tracing::warn!(key = %warning_key, "falling back to default configuration");
        }

        let i18n = I18n::new(flags.lang.clone(), &config);

        let assets_dir = flags
            .assets_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));
        let catalog = Catalog::new(&assets_dir);

        let preload_enabled = config
            .preload
            .enabled
            .unwrap_or(config::DEFAULT_PRELOAD_ENABLED);

        let app = App {
            i18n,
            gallery: gallery::State::new(catalog.len()),
            lightbox: lightbox::State::new(catalog.len()),
            preloaded: PreloadedSet::new(catalog.len()),
            window_width: config::DEFAULT_WINDOW_WIDTH,
            theme_mode: config.general.theme_mode,
            background_theme: config.display.background_theme.unwrap_or_default(),
            catalog,
        };

        // Each grid cell loads its thumbnail independently of the preloader
        let mut tasks: Vec<Task<Message>> = app
            .catalog
            .descriptors()
            .iter()
            .enumerate()
            .map(|(index, descriptor)| {
                let path = descriptor.source_path.clone();
                Task::perform(media::load_image_async(path), move |(_, result)| {
                    Message::Gallery(gallery::Message::ThumbnailLoaded { index, result })
                })
            })
            .collect();

        if preload_enabled {
            let descriptors = app.catalog.descriptors().to_vec();
            tasks.push(Task::perform(
                media::preload_catalog(descriptors),
                Message::PreloadCompleted,
            ));
        } else {
            tracing::debug!("startup preload disabled by configuration");
        }

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.is_animating()),
        ])
    }

    /// Returns whether any component animation is running.
    fn is_animating(&self) -> bool {
        self.gallery.is_animating() || self.lightbox.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG_LEN;
    use crate::error::Error;
    use crate::media::{ImageData, PreloadOutcome};

    fn test_app() -> App {
        let catalog = Catalog::new(std::path::Path::new("/assets"));
        App {
            i18n: I18n::default(),
            gallery: gallery::State::new(catalog.len()),
            lightbox: lightbox::State::new(catalog.len()),
            preloaded: PreloadedSet::new(catalog.len()),
            window_width: config::DEFAULT_WINDOW_WIDTH,
            theme_mode: ThemeMode::Dark,
            background_theme: BackgroundTheme::Dark,
            catalog,
        }
    }

    fn test_image() -> ImageData {
        ImageData::from_rgba(2, 2, vec![0u8; 16])
    }

    #[test]
    fn clicking_a_thumbnail_opens_the_lightbox_there() {
        let mut app = test_app();
        let _ = app.update(Message::Gallery(gallery::Message::CellPressed(3)));

        assert_eq!(app.lightbox.selected_index(), Some(3));
        assert!(!app.lightbox.image_loaded());
    }

    #[test]
    fn arrow_messages_are_no_ops_while_closed() {
        let mut app = test_app();
        let _ = app.update(Message::Lightbox(lightbox::Message::Previous));
        let _ = app.update(Message::Lightbox(lightbox::Message::Next));
        let _ = app.update(Message::Lightbox(lightbox::Message::Close));

        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn preload_outcome_fills_warm_cache() {
        let mut app = test_app();
        let outcome = PreloadOutcome {
            loaded: vec![(0, test_image()), (5, test_image())],
            failures: vec![(1, Error::Io("missing".into()))],
        };

        let _ = app.update(Message::PreloadCompleted(outcome));

        assert_eq!(app.preloaded.loaded_count(), 2);
        assert!(app.preloaded.get(0).is_some());
        assert!(app.preloaded.get(1).is_none());
    }

    #[test]
    fn preload_outcome_never_disturbs_grid_state() {
        let mut app = test_app();
        let outcome = PreloadOutcome {
            loaded: (0..CATALOG_LEN).map(|i| (i, test_image())).collect(),
            failures: Vec::new(),
        };

        let _ = app.update(Message::PreloadCompleted(outcome));

        // Grid load flags are driven by the independent thumbnail loads only
        assert_eq!(app.gallery.load_flags().loaded_count(), 0);
    }

    #[test]
    fn window_resize_updates_grid_columns() {
        let mut app = test_app();
        let _ = app.update(Message::WindowResized(iced::Size::new(500.0, 400.0)));
        assert_eq!(gallery::columns_for_width(app.window_width), 2);

        let _ = app.update(Message::WindowResized(iced::Size::new(1600.0, 900.0)));
        assert_eq!(gallery::columns_for_width(app.window_width), 4);
    }

    #[test]
    fn close_request_releases_lightbox_before_teardown() {
        let mut app = test_app();
        let _ = app.update(Message::Gallery(gallery::Message::CellPressed(2)));
        assert!(app.lightbox.is_open());

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
        assert!(!app.lightbox.is_open());
        assert!(!app.lightbox.image_loaded());
    }
}
