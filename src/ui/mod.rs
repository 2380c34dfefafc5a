// SPDX-License-Identifier: MPL-2.0
//! UI components, styles and design tokens.

pub mod design_tokens;
pub mod gallery;
pub mod lightbox;
pub mod styles;
pub mod theming;
pub mod widgets;
