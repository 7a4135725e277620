// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row geometry for a vertically stacked list, and slot resolution from pointer positions.
//!
//! ## Notes
//!
//! The [`controller`](crate::controller) never looks at geometry. This module is a reference
//! resolver for rendering layers that lay rows out as a single column separated by header and
//! footer gaps, which is how the list screen this crate was built for arranges them.
//!
//! Resolution is first-match in slot order with inclusive bounds: a point exactly on the
//! boundary between two touching rows belongs to the upper one. Points in a gap, above the first
//! row, below the last row, or beside the column resolve to `None`.
//!
//! ```
//! use understory_reorder::rows::{RowLayout, SectionSpacing};
//! use kurbo::Point;
//!
//! let layout = RowLayout::uniform(3, 50.0, 320.0, SectionSpacing::default());
//! assert_eq!(layout.slot_at(Point::new(100.0, 30.0)), Some(0));
//! // Between rows 0 and 1 lies a 10pt gap.
//! assert_eq!(layout.slot_at(Point::new(100.0, 65.0)), None);
//! assert_eq!(layout.slot_at(Point::new(100.0, 95.0)), Some(1));
//! ```

use alloc::vec::Vec;

use kurbo::{Point, Rect};

/// Gaps inserted above and below each row.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SectionSpacing {
    /// Gap above the first row.
    pub first_header: f64,
    /// Gap above every other row.
    pub header: f64,
    /// Gap below every row except the last.
    pub footer: f64,
    /// Gap below the last row.
    pub last_footer: f64,
}

impl SectionSpacing {
    /// No gaps; rows touch.
    pub const ZERO: Self = Self {
        first_header: 0.0,
        header: 0.0,
        footer: 0.0,
        last_footer: 0.0,
    };
}

impl Default for SectionSpacing {
    fn default() -> Self {
        Self {
            first_header: 10.0,
            header: 5.0,
            footer: 5.0,
            last_footer: 0.0,
        }
    }
}

/// World-space rectangles of every row, in slot order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowLayout {
    rows: Vec<Rect>,
    content_height: f64,
}

impl RowLayout {
    /// Stack rows of the given heights from `y = 0`, each `width` wide.
    pub fn new(heights: impl IntoIterator<Item = f64>, width: f64, spacing: SectionSpacing) -> Self {
        let heights: Vec<f64> = heights.into_iter().collect();
        let last = heights.len().saturating_sub(1);
        let mut rows = Vec::with_capacity(heights.len());
        let mut y = 0.0;
        for (i, h) in heights.into_iter().enumerate() {
            y += if i == 0 {
                spacing.first_header
            } else {
                spacing.header
            };
            rows.push(Rect::new(0.0, y, width, y + h));
            y += h;
            y += if i == last {
                spacing.last_footer
            } else {
                spacing.footer
            };
        }
        Self {
            rows,
            content_height: y,
        }
    }

    /// Stack `count` rows of equal `height`.
    pub fn uniform(count: usize, height: f64, width: f64, spacing: SectionSpacing) -> Self {
        Self::new(core::iter::repeat_n(height, count), width, spacing)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All row rectangles in slot order.
    pub fn rows(&self) -> &[Rect] {
        &self.rows
    }

    /// Total height including all gaps.
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Rectangle of the row at `slot`.
    pub fn row_rect(&self, slot: usize) -> Option<Rect> {
        self.rows.get(slot).copied()
    }

    /// Center of the row at `slot`; where a finishing ghost comes to rest.
    pub fn row_center(&self, slot: usize) -> Option<Point> {
        self.row_rect(slot).map(|r| r.center())
    }

    /// Where to draw the ghost of the row at `slot` while the pointer is at `y`.
    ///
    /// The ghost keeps the row's horizontal center and follows the pointer vertically.
    pub fn ghost_center(&self, slot: usize, y: f64) -> Option<Point> {
        self.row_center(slot).map(|c| Point::new(c.x, y))
    }

    /// Slot of the first row whose bounds (edges included) contain `pt`.
    pub fn slot_at(&self, pt: Point) -> Option<usize> {
        self.rows.iter().position(|r| {
            r.x0 <= pt.x && pt.x <= r.x1 && r.y0 <= pt.y && pt.y <= r.y1
        })
    }
}
