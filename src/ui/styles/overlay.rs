// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the lightbox backdrop and position counter.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn indicator_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

fn indicator_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Generic style for overlay indicators like the position counter.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(indicator_background())),
        text_color: Some(WHITE),
        border: Border {
            color: indicator_border(),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Style for the near-opaque lightbox backdrop.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_nearly_opaque() {
        let theme = Theme::Dark;
        let style = backdrop(&theme);

        match style.background {
            Some(Background::Color(color)) => {
                assert!(color.a >= opacity::OVERLAY_PRESSED);
                assert!(color.a < opacity::OPAQUE);
            }
            other => panic!("expected a solid background, got {other:?}"),
        }
    }

    #[test]
    fn indicator_text_is_legible_on_dark_background() {
        let theme = Theme::Dark;
        let style = indicator(8.0)(&theme);
        assert_eq!(style.text_color, Some(WHITE));
    }
}
