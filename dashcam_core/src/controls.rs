// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolbar enablement derived from grid contents.

use crate::grid::SlotGrid;

/// Which toolbar controls are enabled, and whether the info area is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ControlState {
    /// Play every loaded video.
    pub play: bool,
    /// Pause every loaded video.
    pub pause: bool,
    /// Enter fullscreen.
    pub fullscreen: bool,
    /// Align loaded videos on one media time. Needs two videos.
    pub sync: bool,
    /// Unload everything.
    pub clear_all: bool,
    /// Show file information.
    pub info_visible: bool,
}

impl ControlState {
    /// Everything disabled; the state before any file is chosen.
    pub const DISABLED: Self = Self {
        play: false,
        pause: false,
        fullscreen: false,
        sync: false,
        clear_all: false,
        info_visible: false,
    };

    /// Derives the control state from the grid.
    #[must_use]
    pub fn derive(grid: &SlotGrid) -> Self {
        Self::for_filled(grid.filled_count())
    }

    /// Derives the control state from a count of loaded videos.
    #[must_use]
    pub const fn for_filled(filled: u32) -> Self {
        let any = filled > 0;
        Self {
            play: any,
            pause: any,
            fullscreen: any,
            sync: filled > 1,
            clear_all: any,
            info_visible: any,
        }
    }
}
