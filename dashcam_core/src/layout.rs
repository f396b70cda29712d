// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid layouts for the three viewer variants.
//!
//! A [`Layout`] turns the current slot count into a [`GridTemplate`] (column
//! and row counts). Backends map the template onto whatever grid primitive
//! they have; the web backend emits CSS grid tracks.

use alloc::format;
use alloc::string::String;

/// How slots are arranged on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// One video, no growth.
    Single,
    /// Fixed column count; rows are added as slots fill up.
    Rows {
        /// Slots per row. Zero is treated as one.
        columns: u32,
    },
    /// Every slot in a single row.
    Strip,
}

/// Column and row counts for a given slot count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridTemplate {
    /// Number of columns (at least 1).
    pub columns: u32,
    /// Number of rows (at least 1).
    pub rows: u32,
}

impl GridTemplate {
    /// The template of an empty or single-slot grid.
    pub const UNIT: Self = Self {
        columns: 1,
        rows: 1,
    };

    /// Returns the CSS `grid-template-columns` value for this template.
    #[must_use]
    pub fn css_columns(&self) -> String {
        format!("repeat({}, minmax(0, 1fr))", self.columns)
    }

    /// Returns the CSS `grid-template-rows` value for this template.
    #[must_use]
    pub fn css_rows(&self) -> String {
        format!("repeat({}, auto)", self.rows)
    }

    /// Returns the `(column, row)` cell of the slot at `index`, zero-based.
    #[must_use]
    pub const fn cell_of(&self, index: u32) -> (u32, u32) {
        (index % self.columns, index / self.columns)
    }
}

impl Layout {
    /// Returns the template for `slot_count` slots.
    #[must_use]
    pub const fn template(self, slot_count: u32) -> GridTemplate {
        if slot_count == 0 {
            return GridTemplate::UNIT;
        }
        match self {
            Self::Single => GridTemplate::UNIT,
            Self::Rows { columns } => {
                let columns = if columns == 0 { 1 } else { columns };
                let used = if slot_count < columns {
                    slot_count
                } else {
                    columns
                };
                GridTemplate {
                    columns: used,
                    rows: slot_count.div_ceil(columns),
                }
            }
            Self::Strip => GridTemplate {
                columns: slot_count,
                rows: 1,
            },
        }
    }

    /// Returns `false` for layouts that never add slots.
    #[must_use]
    pub const fn grows(self) -> bool {
        !matches!(self, Self::Single)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_fill_columns_before_adding_rows() {
        let layout = Layout::Rows { columns: 3 };
        assert_eq!(
            layout.template(2),
            GridTemplate {
                columns: 2,
                rows: 1
            }
        );
        assert_eq!(
            layout.template(3),
            GridTemplate {
                columns: 3,
                rows: 1
            }
        );
        assert_eq!(
            layout.template(4),
            GridTemplate {
                columns: 3,
                rows: 2
            }
        );
        assert_eq!(
            layout.template(9),
            GridTemplate {
                columns: 3,
                rows: 3
            }
        );
    }

    #[test]
    fn strip_keeps_one_row() {
        assert_eq!(
            Layout::Strip.template(5),
            GridTemplate {
                columns: 5,
                rows: 1
            }
        );
    }

    #[test]
    fn degenerate_inputs_collapse_to_unit() {
        assert_eq!(Layout::Strip.template(0), GridTemplate::UNIT);
        assert_eq!(Layout::Single.template(4), GridTemplate::UNIT);
        let zero_columns = Layout::Rows { columns: 0 }.template(3);
        assert_eq!(zero_columns.columns, 1, "zero columns acts as one");
        assert_eq!(zero_columns.rows, 3);
    }

    #[test]
    fn cell_of_wraps_by_column_count() {
        let template = Layout::Rows { columns: 3 }.template(7);
        assert_eq!(template.cell_of(0), (0, 0));
        assert_eq!(template.cell_of(4), (1, 1));
        assert_eq!(template.cell_of(6), (0, 2));
    }

    #[test]
    fn css_tracks() {
        let template = GridTemplate {
            columns: 3,
            rows: 2,
        };
        assert_eq!(template.css_columns(), "repeat(3, minmax(0, 1fr))");
        assert_eq!(template.css_rows(), "repeat(2, auto)");
    }

    #[test]
    fn only_single_is_fixed() {
        assert!(!Layout::Single.grows());
        assert!(Layout::Strip.grows());
        assert!(Layout::Rows { columns: 2 }.grows());
    }
}
