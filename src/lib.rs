// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a small image gallery built with the Iced GUI framework.
//!
//! It renders a fixed catalog of images as a responsive thumbnail grid,
//! preloads the full-size images in the background, and opens a fullscreen
//! lightbox viewer with keyboard and pointer navigation.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
