// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by the grid, configuration and backend contract.

use alloc::string::String;
use core::fmt;

use crate::grid::SlotId;

/// Errors from viewer operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewerError {
    /// A slot index past the end of the grid.
    SlotOutOfRange {
        /// The requested index.
        index: u32,
        /// Number of slots in the grid.
        len: u32,
    },
    /// The handle refers to content that has since been replaced or cleared.
    StaleSlot(SlotId),
    /// The slot holds no video.
    EmptySlot(SlotId),
    /// The platform refused to create an object URL.
    ObjectUrl(String),
    /// The page asked for a viewer mode that does not exist.
    UnknownMode(String),
    /// A configuration override could not be applied.
    InvalidSetting {
        /// Setting name.
        key: String,
        /// Raw value as found on the page.
        value: String,
    },
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlotOutOfRange { index, len } => {
                write!(f, "slot {index} out of range (grid has {len} slots)")
            }
            Self::StaleSlot(id) => write!(f, "stale slot handle {id:?}"),
            Self::EmptySlot(id) => write!(f, "slot {id:?} holds no video"),
            Self::ObjectUrl(reason) => write!(f, "object URL creation failed: {reason}"),
            Self::UnknownMode(mode) => write!(f, "unknown viewer mode `{mode}`"),
            Self::InvalidSetting { key, value } => {
                write!(f, "invalid value `{value}` for setting `{key}`")
            }
        }
    }
}

impl core::error::Error for ViewerError {}
