// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the gallery page and, while the lightbox is open, stacks the
//! fullscreen overlay on top of it with the page's scrolling locked.

use super::{App, Message};
use crate::app::config::BackgroundTheme;
use crate::ui::design_tokens::{palette, spacing};
use crate::ui::gallery;
use crate::ui::widgets::scroll_lock;
use iced::widget::{Column, Container, Scrollable, Stack};
use iced::{Background, Element, Length, Theme};

/// Renders the application view.
pub fn view(app: &App) -> Element<'_, Message> {
    let columns = gallery::columns_for_width(app.window_width);

    let heading = gallery::heading(
        &app.i18n,
        app.background_theme == BackgroundTheme::Dark,
    );

    let grid = app.gallery.view(columns).map(Message::Gallery);

    let page_content = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .push(heading)
        .push(grid);

    let page = Scrollable::new(page_content)
        .width(Length::Fill)
        .height(Length::Fill);

    // While the lightbox is open the page underneath must not scroll
    let page = scroll_lock(page, app.lightbox.is_open());

    let surface_color = match app.background_theme {
        BackgroundTheme::Light => palette::WHITE,
        BackgroundTheme::Dark => palette::GRAY_900,
    };

    let base = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(surface_color)),
            ..Default::default()
        });

    if app.lightbox.is_open() {
        let overlay = app.lightbox.view(&app.i18n).map(Message::Lightbox);

        Stack::new()
            .push(base)
            .push(overlay)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        base.into()
    }
}
