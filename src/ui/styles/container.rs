// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Placeholder surface shown behind a thumbnail while it is loading.
///
/// Matches the dark gallery surface so the spinner appears on a quiet cell
/// rather than a flash of background color.
pub fn thumbnail_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Rounded clipping surface for a loaded thumbnail cell.
pub fn thumbnail_cell(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
