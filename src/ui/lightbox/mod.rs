// SPDX-License-Identifier: MPL-2.0
//! Fullscreen lightbox viewer sub-component.
//!
//! A small state machine over `Closed` and `Open(index)`. Opening, closing
//! and navigating always reset the full-image loaded flag, and navigation
//! wraps around the catalog ends in both directions. While open, the
//! application suppresses gallery scrolling; every close path (Escape, close
//! button, backdrop click, window teardown) releases it again.

use crate::error::Result;
use crate::i18n::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, tooltip, Column, Container, Space, Stack, Text};
use iced::{ContentFit, Element, Length};

/// Spinner rotation speed in radians per animation tick.
const SPINNER_SPEED: f32 = 0.35;

/// Opacity gained per animation tick once the full image has loaded.
/// At a 100 ms tick this approximates a 300 ms fade.
const FADE_STEP: f32 = 0.34;

/// Lightbox state.
///
/// `selected` doubles as the machine state: `None` is `Closed`, `Some(i)` is
/// `Open(i)`. The invariant that `image_loaded` is false while closed is
/// maintained by every transition.
#[derive(Debug, Clone)]
pub struct State {
    /// Catalog index currently open, if any.
    selected: Option<usize>,
    /// Decoded full-size image for the selected index.
    image: Option<ImageData>,
    /// Whether the currently selected full-size image has finished loading.
    image_loaded: bool,
    /// Fade-in progress of the full image in [0, 1].
    fade: f32,
    /// Spinner rotation angle in radians.
    spinner_rotation: f32,
    /// Catalog length used for wrap-around arithmetic.
    catalog_len: usize,
}

/// Messages for the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the viewer at a catalog index.
    Open(usize),
    /// Navigate to the previous image (wraps at index 0).
    Previous,
    /// Navigate to the next image (wraps at the last index).
    Next,
    /// Close the viewer (Escape key or close button).
    Close,
    /// The backdrop itself was clicked (outside the image and controls).
    BackdropPressed,
    /// The image frame was clicked; consumed so it never closes the viewer.
    ContentPressed,
    /// The full-size decode settled.
    ImageLoaded {
        index: usize,
        result: Result<ImageData>,
    },
    /// Advance spinner rotation and fade-in animations.
    AnimationTick,
}

/// Effects produced by lightbox transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The viewer is now showing `index` and needs its full-size image.
    RequestImage(usize),
    /// The viewer closed; gallery scrolling may resume.
    Closed,
}

impl State {
    /// Creates a closed lightbox for a catalog of `len` images.
    #[must_use]
    pub fn new(catalog_len: usize) -> Self {
        Self {
            selected: None,
            image: None,
            image_loaded: false,
            fade: 0.0,
            spinner_rotation: 0.0,
            catalog_len,
        }
    }

    /// Handle a lightbox message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Open(index) => {
                if index >= self.catalog_len {
                    return Effect::None;
                }
                self.show(index)
            }
            Message::Previous => match self.selected {
                Some(index) => {
                    let target = if index == 0 {
                        self.catalog_len.saturating_sub(1)
                    } else {
                        index - 1
                    };
                    self.show(target)
                }
                None => Effect::None,
            },
            Message::Next => match self.selected {
                Some(index) => {
                    let target = if index + 1 >= self.catalog_len {
                        0
                    } else {
                        index + 1
                    };
                    self.show(target)
                }
                None => Effect::None,
            },
            Message::Close | Message::BackdropPressed => {
                if self.selected.is_none() {
                    return Effect::None;
                }
                self.reset();
                Effect::Closed
            }
            Message::ContentPressed => Effect::None,
            Message::ImageLoaded { index, result } => {
                // Discard completions for an index we already navigated away from
                if self.selected != Some(index) {
                    return Effect::None;
                }
                match result {
                    Ok(image) => {
                        self.image = Some(image);
                        self.image_loaded = true;
                        self.fade = 0.0;
                    }
                    Err(error) => {
                        // The spinner stays; a failed full-size load has no
                        // dedicated error surface.
                        tracing::warn!(index, %error, "lightbox image load failed");
                    }
                }
                Effect::None
            }
            Message::AnimationTick => {
                if self.selected.is_some() {
                    if !self.image_loaded {
                        self.spinner_rotation += SPINNER_SPEED;
                        if self.spinner_rotation > std::f32::consts::TAU {
                            self.spinner_rotation -= std::f32::consts::TAU;
                        }
                    } else if self.fade < 1.0 {
                        self.fade = (self.fade + FADE_STEP).min(1.0);
                    }
                }
                Effect::None
            }
        }
    }

    /// Transition into `Open(index)`, dropping any previous image.
    fn show(&mut self, index: usize) -> Effect {
        self.selected = Some(index);
        self.image = None;
        self.image_loaded = false;
        self.fade = 0.0;
        self.spinner_rotation = 0.0;
        Effect::RequestImage(index)
    }

    /// Reset to the closed state.
    fn reset(&mut self) {
        self.selected = None;
        self.image = None;
        self.image_loaded = false;
        self.fade = 0.0;
        self.spinner_rotation = 0.0;
    }

    /// Returns whether the viewer is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Returns the open catalog index, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Returns whether the current full-size image has finished loading.
    #[must_use]
    pub fn image_loaded(&self) -> bool {
        self.image_loaded
    }

    /// Returns whether a spinner or fade animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.selected.is_some() && (!self.image_loaded || self.fade < 1.0)
    }

    /// Builds the fullscreen overlay view. Renders nothing while closed.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let Some(index) = self.selected else {
            return Space::new().into();
        };

        let mut layers = Stack::new();

        // Backdrop: clicking it (and only it) closes the viewer
        layers = layers.push(
            mouse_area(
                Container::new(Space::new())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::overlay::backdrop),
            )
            .on_press(Message::BackdropPressed),
        );

        // Centered image frame; clicks inside are consumed
        layers = layers.push(
            Container::new(
                mouse_area(self.view_frame(i18n)).on_press(Message::ContentPressed),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .padding(spacing::MD),
        );

        // Navigation chevrons
        layers = layers.push(self.chevron_zone(i18n, Direction::Previous));
        layers = layers.push(self.chevron_zone(i18n, Direction::Next));

        // Close button, top right
        let close_button = button(Text::new("✕").size(typography::TITLE_MD))
            .padding(spacing::SM)
            .style(styles::button_overlay(
                palette::WHITE,
                opacity::TRANSPARENT,
                opacity::OVERLAY_MEDIUM,
            ))
            .on_press(Message::Close);
        let close_button = tooltip(
            close_button,
            Container::new(Text::new(i18n.tr("lightbox-close")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::overlay::indicator(radius::SM)),
            tooltip::Position::Left,
        );
        layers = layers.push(
            Container::new(close_button)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Top),
        );

        // Position counter, bottom center
        let counter = Container::new(
            Text::new(format!("{} / {}", index + 1, self.catalog_len))
                .size(typography::CAPTION),
        )
        .padding([spacing::XXS, spacing::SM])
        .style(styles::overlay::indicator(radius::FULL));
        layers = layers.push(
            Container::new(counter)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::LG)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Bottom),
        );

        layers.width(Length::Fill).height(Length::Fill).into()
    }

    /// The central frame: spinner while loading, then the fading image.
    fn view_frame<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut frame = Stack::new();

        if let Some(image_data) = &self.image {
            let full_image = iced::widget::Image::new(image_data.handle.clone())
                .content_fit(ContentFit::Contain)
                .opacity(self.fade);

            frame = frame.push(
                Container::new(full_image)
                    .max_width(sizing::LIGHTBOX_MAX_WIDTH)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
            );
        }

        if !self.image_loaded {
            let spinner = AnimatedSpinner::new(palette::PRIMARY_400, self.spinner_rotation)
                .with_size(sizing::ICON_XXL)
                .into_element();

            let loading_text = Text::new(i18n.tr("lightbox-loading")).size(typography::BODY);

            frame = frame.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::SM)
                        .align_x(Horizontal::Center)
                        .push(spinner)
                        .push(loading_text),
                )
                .padding(spacing::XL)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
            );
        }

        frame.into()
    }

    fn chevron_zone<'a>(&'a self, i18n: &'a I18n, direction: Direction) -> Element<'a, Message> {
        let (glyph, message, align, label_key) = match direction {
            Direction::Previous => (
                "◀",
                Message::Previous,
                Horizontal::Left,
                "lightbox-previous",
            ),
            Direction::Next => ("▶", Message::Next, Horizontal::Right, "lightbox-next"),
        };

        let chevron = button(Text::new(glyph).size(typography::TITLE_MD))
            .padding(spacing::SM)
            .style(styles::button_overlay(
                palette::WHITE,
                opacity::TRANSPARENT,
                opacity::OVERLAY_MEDIUM,
            ))
            .on_press(message.clone());

        let chevron = tooltip(
            chevron,
            Container::new(Text::new(i18n.tr(label_key)).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::overlay::indicator(radius::SM)),
            tooltip::Position::Bottom,
        );

        // Clickable zone is taller than the button so near-misses still navigate
        let zone = Container::new(chevron)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(align)
            .align_y(Vertical::Center);

        let zone_clickable = mouse_area(zone).on_release(message);

        Container::new(zone_clickable)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align)
            .into()
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Previous,
    Next,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const LEN: usize = 8;

    fn open_at(index: usize) -> State {
        let mut state = State::new(LEN);
        assert_eq!(
            state.handle(Message::Open(index)),
            Effect::RequestImage(index)
        );
        state
    }

    fn loaded_image() -> ImageData {
        ImageData::from_rgba(2, 2, vec![0u8; 16])
    }

    #[test]
    fn opening_any_thumbnail_selects_it_with_image_not_loaded() {
        for index in 0..LEN {
            let state = open_at(index);
            assert_eq!(state.selected_index(), Some(index));
            assert!(!state.image_loaded());
        }
    }

    #[test]
    fn open_out_of_range_is_rejected() {
        let mut state = State::new(LEN);
        assert_eq!(state.handle(Message::Open(LEN)), Effect::None);
        assert!(!state.is_open());
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut state = open_at(0);
        let effect = state.handle(Message::Previous);
        assert_eq!(effect, Effect::RequestImage(LEN - 1));
        assert_eq!(state.selected_index(), Some(LEN - 1));
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut state = open_at(LEN - 1);
        let effect = state.handle(Message::Next);
        assert_eq!(effect, Effect::RequestImage(0));
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn navigation_while_closed_is_a_no_op() {
        let mut state = State::new(LEN);
        assert_eq!(state.handle(Message::Previous), Effect::None);
        assert_eq!(state.handle(Message::Next), Effect::None);
        assert_eq!(state.handle(Message::Close), Effect::None);
        assert!(!state.is_open());
        assert!(!state.image_loaded());
    }

    #[test]
    fn every_transition_resets_image_loaded() {
        let mut state = open_at(2);
        state.handle(Message::ImageLoaded {
            index: 2,
            result: Ok(loaded_image()),
        });
        assert!(state.image_loaded());

        state.handle(Message::Next);
        assert!(!state.image_loaded());

        state.handle(Message::ImageLoaded {
            index: 3,
            result: Ok(loaded_image()),
        });
        assert!(state.image_loaded());

        state.handle(Message::Previous);
        assert!(!state.image_loaded());
    }

    #[test]
    fn close_clears_selection_and_loaded_flag() {
        let mut state = open_at(2);
        state.handle(Message::ImageLoaded {
            index: 2,
            result: Ok(loaded_image()),
        });

        let effect = state.handle(Message::Close);
        assert_eq!(effect, Effect::Closed);
        assert!(!state.is_open());
        assert!(!state.image_loaded());
    }

    #[test]
    fn backdrop_click_closes_but_content_click_does_not() {
        let mut state = open_at(2);

        assert_eq!(state.handle(Message::ContentPressed), Effect::None);
        assert_eq!(state.selected_index(), Some(2));

        assert_eq!(state.handle(Message::BackdropPressed), Effect::Closed);
        assert!(!state.is_open());
    }

    #[test]
    fn stale_image_completion_is_discarded() {
        let mut state = open_at(2);
        state.handle(Message::Next); // now at 3, load for 2 is stale

        state.handle(Message::ImageLoaded {
            index: 2,
            result: Ok(loaded_image()),
        });
        assert!(!state.image_loaded());

        state.handle(Message::ImageLoaded {
            index: 3,
            result: Ok(loaded_image()),
        });
        assert!(state.image_loaded());
    }

    #[test]
    fn failed_image_load_keeps_spinner_state() {
        let mut state = open_at(2);
        state.handle(Message::ImageLoaded {
            index: 2,
            result: Err(Error::Io("missing".into())),
        });

        assert!(state.is_open());
        assert!(!state.image_loaded());
        assert!(state.is_animating());
    }

    #[test]
    fn arrow_cycle_returns_to_start() {
        // Click thumbnail 3, press ArrowRight eight times: 4,5,6,7,0,1,2,3
        let mut state = open_at(3);
        let expected = [4, 5, 6, 7, 0, 1, 2, 3];
        for target in expected {
            assert_eq!(state.handle(Message::Next), Effect::RequestImage(target));
        }
        assert_eq!(state.selected_index(), Some(3));

        assert_eq!(state.handle(Message::Close), Effect::Closed);
        assert!(!state.is_open());
    }

    #[test]
    fn tick_spins_while_loading_and_fades_after() {
        let mut state = open_at(1);
        state.handle(Message::AnimationTick);
        assert!(state.spinner_rotation > 0.0);
        assert_eq!(state.fade, 0.0);

        state.handle(Message::ImageLoaded {
            index: 1,
            result: Ok(loaded_image()),
        });
        state.handle(Message::AnimationTick);
        assert!(state.fade > 0.0);

        for _ in 0..10 {
            state.handle(Message::AnimationTick);
        }
        assert_eq!(state.fade, 1.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn tick_while_closed_does_nothing() {
        let mut state = State::new(LEN);
        state.handle(Message::AnimationTick);
        assert_eq!(state.spinner_rotation, 0.0);
        assert!(!state.is_animating());
    }
}
