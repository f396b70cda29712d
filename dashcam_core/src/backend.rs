// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! The core never calls a browser API. A backend provides two pieces:
//!
//! - **Object URLs**: Implements [`UrlRegistry`] so the grid can create a
//!   playable URL for a user-selected file and release it again. The grid
//!   owns the lifecycle: it revokes a slot's URL before overwriting it and
//!   when slots are cleared, so a registry never has to track ownership.
//!
//! - **Presenter**: Implements [`Presenter`] to apply
//!   [`GridChanges`](crate::grid::GridChanges) to a platform-native tree of
//!   video cells (DOM elements on the web).
//!
//! Media commands (play, pause, seek, fullscreen) and timers are not
//! abstracted: their setup and failure modes differ too much between
//! platforms, so backends expose them as free functions.
//!
//! # Handler pseudocode
//!
//! ```rust,ignore
//! fn on_file_selected(index: u32, file: File) {
//!     let info = FileInfo::new(file.name(), file.size() as u64);
//!     let outcome = grid.load(index, info, &file, &mut urls)?;
//!     let changes = grid.take_changes();
//!     presenter.apply(&grid, &changes);
//!     toolbar.set(ControlState::derive(&grid));
//! }
//! ```

use crate::error::ViewerError;
use crate::grid::{GridChanges, ObjectUrl, SlotGrid};

/// Creates and releases object URLs for local files.
pub trait UrlRegistry {
    /// The platform file handle a URL is created for.
    type Source: ?Sized;

    /// Creates a URL that a video element can play `source` from.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::ObjectUrl`] if the platform refuses.
    fn create(&mut self, source: &Self::Source) -> Result<ObjectUrl, ViewerError>;

    /// Releases a URL previously returned by [`create`](Self::create).
    fn revoke(&mut self, url: &ObjectUrl);
}

/// Applies grid changes to a platform-native presentation tree.
pub trait Presenter {
    /// Applies the given [`GridChanges`] to the backing tree, reading current
    /// slot contents from `grid` as needed.
    fn apply(&mut self, grid: &SlotGrid, changes: &GridChanges);
}
