// SPDX-License-Identifier: MPL-2.0
//! Default values for user-facing configuration.

/// Whether the startup preload batch is enabled by default.
pub const DEFAULT_PRELOAD_ENABLED: bool = true;

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 750.0;

/// Minimum window width; below this the two-column grid becomes unusable.
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;
