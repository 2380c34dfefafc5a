// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid sub-component.
//!
//! Renders the catalog as a responsive grid. Each cell shows an animated
//! spinner until its decode completes, then cross-fades the thumbnail in.
//! Clicking a cell asks the application to open the lightbox at that index.

pub mod load_flags;

pub use load_flags::LoadFlags;

use crate::error::Result;
use crate::i18n::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{mouse_area, Column, Container, Row, Stack, Text};
use iced::{ContentFit, Element, Length, Theme};

/// Spinner rotation speed in radians per animation tick.
const SPINNER_SPEED: f32 = 0.35;

/// Opacity gained per animation tick once a thumbnail has loaded.
/// At a 100 ms tick this approximates the 500 ms cross-fade of the grid.
const FADE_STEP: f32 = 0.2;

/// Window width below which the grid collapses to two columns.
const TWO_COLUMN_MAX_WIDTH: f32 = 640.0;

/// Window width below which the grid uses three columns.
const THREE_COLUMN_MAX_WIDTH: f32 = 1024.0;

/// Returns the grid column count for the given window width.
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    if width < TWO_COLUMN_MAX_WIDTH {
        2
    } else if width < THREE_COLUMN_MAX_WIDTH {
        3
    } else {
        4
    }
}

/// Thumbnail grid state.
#[derive(Debug, Clone)]
pub struct State {
    /// Per-cell load-completion flags, index-aligned with the catalog.
    load_flags: LoadFlags,
    /// Decoded thumbnails, filled in as loads complete.
    thumbnails: Vec<Option<ImageData>>,
    /// Per-cell fade-in progress in [0, 1].
    fade: Vec<f32>,
    /// Shared spinner rotation angle in radians.
    spinner_rotation: f32,
}

/// Messages for the thumbnail grid.
#[derive(Debug, Clone)]
pub enum Message {
    /// A cell was clicked.
    CellPressed(usize),
    /// A thumbnail decode settled.
    ThumbnailLoaded {
        index: usize,
        result: Result<ImageData>,
    },
    /// Advance spinner rotation and fade-in animations.
    AnimationTick,
}

/// Effects produced by the grid for the application to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Open the lightbox at the given catalog index.
    OpenLightbox(usize),
}

impl State {
    /// Creates grid state for a catalog of `len` images.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            load_flags: LoadFlags::new(len),
            thumbnails: vec![None; len],
            fade: vec![0.0; len],
            spinner_rotation: 0.0,
        }
    }

    /// Handle a grid message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::CellPressed(index) => {
                if index < self.load_flags.len() {
                    Effect::OpenLightbox(index)
                } else {
                    Effect::None
                }
            }
            Message::ThumbnailLoaded { index, result } => {
                match result {
                    Ok(image) => {
                        if let Some(slot) = self.thumbnails.get_mut(index) {
                            *slot = Some(image);
                            self.load_flags.mark_loaded(index);
                        }
                    }
                    Err(error) => {
                        // The slot keeps its spinner; there is no user-visible
                        // error surface for a failed thumbnail.
                        tracing::warn!(index, %error, "thumbnail load failed");
                    }
                }
                Effect::None
            }
            Message::AnimationTick => {
                if !self.load_flags.all_loaded() {
                    self.spinner_rotation += SPINNER_SPEED;
                    if self.spinner_rotation > std::f32::consts::TAU {
                        self.spinner_rotation -= std::f32::consts::TAU;
                    }
                }
                for index in 0..self.fade.len() {
                    if self.load_flags.is_loaded(index) && self.fade[index] < 1.0 {
                        self.fade[index] = (self.fade[index] + FADE_STEP).min(1.0);
                    }
                }
                Effect::None
            }
        }
    }

    /// Returns whether any spinner or fade animation is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.load_flags.all_loaded()
            || self
                .fade
                .iter()
                .enumerate()
                .any(|(index, fade)| self.load_flags.is_loaded(index) && *fade < 1.0)
    }

    /// Read access to the load flags, mainly for tests and diagnostics.
    #[must_use]
    pub fn load_flags(&self) -> &LoadFlags {
        &self.load_flags
    }

    /// Builds the grid view with the given column count.
    pub fn view(&self, columns: usize) -> Element<'_, Message> {
        let columns = columns.max(1);
        let len = self.load_flags.len();

        let mut grid = Column::new().spacing(spacing::MD);

        for row_start in (0..len).step_by(columns) {
            let mut row = Row::new().spacing(spacing::MD);
            for index in row_start..(row_start + columns) {
                if index < len {
                    row = row.push(self.view_cell(index));
                } else {
                    // Pad the last row so cells keep a uniform width
                    row = row.push(
                        Container::new(iced::widget::Space::new())
                            .width(Length::FillPortion(1))
                            .height(Length::Fixed(0.0)),
                    );
                }
            }
            grid = grid.push(row);
        }

        grid.width(Length::Fill).into()
    }

    fn view_cell(&self, index: usize) -> Element<'_, Message> {
        let loaded = self.load_flags.is_loaded(index);
        let fade = self.fade.get(index).copied().unwrap_or(0.0);

        let mut layers = Stack::new();

        // Spinner placeholder stays underneath until the fade completes,
        // giving the cross-fade something to blend against.
        if !loaded || fade < 1.0 {
            let spinner = AnimatedSpinner::new(palette::PRIMARY_400, self.spinner_rotation)
                .with_size(sizing::ICON_XL)
                .into_element();

            layers = layers.push(
                Container::new(spinner)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center)
                    .style(styles::container::thumbnail_placeholder),
            );
        }

        if loaded {
            if let Some(Some(image_data)) = self.thumbnails.get(index) {
                let thumbnail = iced::widget::Image::new(image_data.handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Cover)
                    .opacity(fade);

                layers = layers.push(
                    Container::new(thumbnail)
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .style(styles::container::thumbnail_cell),
                );
            }
        }

        let cell = Container::new(layers.width(Length::Fill).height(Length::Fill))
            .width(Length::FillPortion(1))
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT));

        mouse_area(cell)
            .interaction(iced::mouse::Interaction::Pointer)
            .on_press(Message::CellPressed(index))
            .into()
    }
}

/// Heading element for the gallery page.
pub fn heading<'a, Message: 'a>(i18n: &I18n, theme_is_dark: bool) -> Element<'a, Message> {
    let color = if theme_is_dark {
        palette::WHITE
    } else {
        palette::GRAY_900
    };

    Container::new(
        Text::new(i18n.tr("gallery-heading"))
            .size(typography::TITLE_LG)
            .style(move |_theme: &Theme| iced::widget::text::Style { color: Some(color) }),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}
