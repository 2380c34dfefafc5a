// SPDX-License-Identifier: MPL-2.0
//! Media loading: image decoding and background preloading.

pub mod image;
pub mod preload;

pub use image::{load_image, ImageData};
pub use preload::{preload_catalog, PreloadOutcome, PreloadedSet};

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Loads an image off the UI thread.
///
/// Decoding happens on the blocking thread pool so large JPEGs never stall
/// rendering. Returns the path together with the result so the caller can
/// detect stale completions after navigation.
pub async fn load_image_async(path: PathBuf) -> (PathBuf, Result<ImageData>) {
    let path_clone = path.clone();
    let result = tokio::task::spawn_blocking(move || load_image(&path_clone))
        .await
        .unwrap_or_else(|e| Err(Error::Io(format!("Image load task failed: {e}"))));

    (path, result)
}
