// SPDX-License-Identifier: MPL-2.0
//! Background preloading of the full catalog at startup.
//!
//! All catalog images are decoded in parallel once at launch and kept in a
//! fixed-slot warm cache. The cache is a pure latency optimization: the grid
//! and the lightbox load their images independently and behave identically
//! when preloading is disabled or fails.
//!
//! Individual loads settle independently. Failures are counted and reported
//! to the log; the successfully decoded subset is retained either way.

use crate::catalog::ImageDescriptor;
use crate::error::{Error, Result};
use crate::media::{load_image, ImageData};

/// Fixed-slot store of preloaded images, index-aligned with the catalog.
///
/// Slots are write-once: an occupied slot is never replaced or evicted, so
/// lookups stay valid for the lifetime of the application.
#[derive(Debug, Clone, Default)]
pub struct PreloadedSet {
    slots: Vec<Option<ImageData>>,
}

impl PreloadedSet {
    /// Creates an empty set with one vacant slot per catalog entry.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Inserts a decoded image at `index`.
    ///
    /// Returns `true` if the slot was vacant and in range. Occupied slots and
    /// out-of-range indices are left untouched.
    pub fn insert(&mut self, index: usize, image: ImageData) -> bool {
        match self.slots.get_mut(index) {
            Some(slot @ None) => {
                *slot = Some(image);
                true
            }
            _ => false,
        }
    }

    /// Returns the preloaded image at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageData> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Total number of slots (equals the catalog length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loaded_count() == 0
    }
}

/// Result of a whole preload batch.
#[derive(Debug, Clone, Default)]
pub struct PreloadOutcome {
    /// Successfully decoded images, keyed by catalog index.
    pub loaded: Vec<(usize, ImageData)>,
    /// Failed loads, keyed by catalog index.
    pub failures: Vec<(usize, Error)>,
}

impl PreloadOutcome {
    /// Returns whether every load in the batch succeeded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of failed loads in the batch.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

/// Decodes every catalog image in parallel and waits for the batch to settle.
///
/// Each descriptor gets its own blocking task; completions may arrive in any
/// order. The returned outcome carries the successful subset alongside the
/// per-index failures.
pub async fn preload_catalog(descriptors: Vec<ImageDescriptor>) -> PreloadOutcome {
    let tasks = descriptors.into_iter().enumerate().map(|(index, descriptor)| {
        tokio::task::spawn_blocking(move || (index, load_image(&descriptor.source_path)))
    });

    let settled = futures_util::future::join_all(tasks).await;

    let mut outcome = PreloadOutcome::default();
    for (task_number, joined) in settled.into_iter().enumerate() {
        let (index, result): (usize, Result<ImageData>) = joined.unwrap_or_else(|e| {
            (
                task_number,
                Err(Error::Io(format!("Preload task failed: {e}"))),
            )
        });

        match result {
            Ok(image) => outcome.loaded.push((index, image)),
            Err(error) => outcome.failures.push((index, error)),
        }
    }

    outcome
}
