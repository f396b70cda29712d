// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewer modes and their preset configurations.
//!
//! Each page picks a [`ViewerMode`]; [`ViewerConfig::for_mode`] returns the
//! matching preset, and individual fields can then be overridden, either
//! directly or by name through [`ViewerConfig::apply_setting`] (the web
//! viewer reads these from `data-*` attributes on `<body>`).

use alloc::string::ToString as _;
use core::fmt;
use core::str::FromStr;

use crate::error::ViewerError;
use crate::layout::Layout;
use crate::sync::SyncConfig;

/// Setting names accepted by [`ViewerConfig::apply_setting`].
pub const SETTING_KEYS: [&str; 6] = [
    "capacity",
    "columns",
    "resync-ms",
    "tolerance",
    "muted",
    "loop",
];

/// The three viewer variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ViewerMode {
    /// One video with its info panel.
    #[default]
    Single,
    /// Several camera angles on a multi-row grid.
    Panoramic,
    /// Several camera angles side by side in one row.
    PanoramicRow,
}

impl ViewerMode {
    /// Returns the name used in page attributes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Panoramic => "panoramic",
            Self::PanoramicRow => "panoramic-row",
        }
    }
}

impl fmt::Display for ViewerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewerMode {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "single" => Ok(Self::Single),
            "panoramic" => Ok(Self::Panoramic),
            "panoramic-row" => Ok(Self::PanoramicRow),
            other => Err(ViewerError::UnknownMode(other.to_string())),
        }
    }
}

/// Configuration for one viewer page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerConfig {
    /// Which variant this is.
    pub mode: ViewerMode,
    /// How slots are arranged.
    pub layout: Layout,
    /// Maximum number of slots.
    pub capacity: u32,
    /// Re-sync timing.
    pub sync: SyncConfig,
    /// Start videos muted.
    pub muted: bool,
    /// Loop videos at the end.
    pub looping: bool,
}

impl ViewerConfig {
    /// Single video viewer.
    #[must_use]
    pub const fn single() -> Self {
        Self {
            mode: ViewerMode::Single,
            layout: Layout::Single,
            capacity: 1,
            sync: SyncConfig::DEFAULT,
            muted: false,
            looping: false,
        }
    }

    /// Multi-row panoramic viewer: three columns, up to nine cameras.
    #[must_use]
    pub const fn panoramic() -> Self {
        Self {
            mode: ViewerMode::Panoramic,
            layout: Layout::Rows { columns: 3 },
            capacity: 9,
            sync: SyncConfig::DEFAULT,
            muted: true,
            looping: true,
        }
    }

    /// Single-row panoramic viewer: up to six cameras side by side.
    #[must_use]
    pub const fn panoramic_row() -> Self {
        Self {
            mode: ViewerMode::PanoramicRow,
            layout: Layout::Strip,
            capacity: 6,
            sync: SyncConfig::DEFAULT,
            muted: true,
            looping: true,
        }
    }

    /// Returns the preset for `mode`.
    #[must_use]
    pub const fn for_mode(mode: ViewerMode) -> Self {
        match mode {
            ViewerMode::Single => Self::single(),
            ViewerMode::Panoramic => Self::panoramic(),
            ViewerMode::PanoramicRow => Self::panoramic_row(),
        }
    }

    /// Overrides one field by name.
    ///
    /// Recognized keys: `capacity`, `columns` (multi-row only), `resync-ms`,
    /// `tolerance` (seconds), `muted` and `loop` (`true`/`false`). The single
    /// viewer ignores `capacity` and `columns`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::InvalidSetting`] for unknown keys, unparsable
    /// values, a zero capacity or column count, and a negative or non-finite
    /// tolerance.
    pub fn apply_setting(&mut self, key: &str, value: &str) -> Result<(), ViewerError> {
        let invalid = || ViewerError::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        };
        let value = value.trim();
        match key {
            "capacity" => {
                let capacity = parse_nonzero(value).ok_or_else(invalid)?;
                if self.layout.grows() {
                    self.capacity = capacity;
                }
            }
            "columns" => {
                let columns = parse_nonzero(value).ok_or_else(invalid)?;
                if let Layout::Rows { .. } = self.layout {
                    self.layout = Layout::Rows { columns };
                }
            }
            "resync-ms" => {
                self.sync.resync_delay_ms = value.parse().map_err(|_| invalid())?;
            }
            "tolerance" => {
                let tolerance: f64 = value.parse().map_err(|_| invalid())?;
                if !tolerance.is_finite() || tolerance < 0.0 {
                    return Err(invalid());
                }
                self.sync.tolerance = tolerance;
            }
            "muted" => self.muted = value.parse().map_err(|_| invalid())?,
            "loop" => self.looping = value.parse().map_err(|_| invalid())?,
            _ => return Err(invalid()),
        }
        Ok(())
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::single()
    }
}

fn parse_nonzero(value: &str) -> Option<u32> {
    value.parse::<u32>().ok().filter(|&n| n > 0)
}

/// Splits a `key=value` pair, as used by query-string style overrides.
#[must_use]
pub fn split_setting(pair: &str) -> Option<(&str, &str)> {
    let (key, value) = pair.split_once('=')?;
    let key = key.trim();
    (!key.is_empty()).then_some((key, value))
}
