// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cosmetic configuration for the drag visuals.
//!
//! The controller never reads this; it exists so that rendering layers share one set of
//! constants instead of hard-coding their own. Defaults give the usual table-view reorder look:
//! quarter-second fades, a near-opaque ghost, and a soft shadow cast to the left.
//!
//! ```
//! use core::time::Duration;
//! use understory_reorder::style::VisualStyle;
//!
//! let snappy = VisualStyle::default()
//!     .with_animation_duration(Duration::from_millis(150))
//!     .with_shadow(kurbo::Vec2::new(0.0, 3.0), 8.0, 0.3);
//! assert_eq!(snappy.animation_duration, Duration::from_millis(150));
//! assert_eq!(snappy.translucent_alpha, 0.98);
//! ```

use core::time::Duration;

use kurbo::Vec2;

/// Timing, opacity, and shadow constants for the ghost and the dragged row.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisualStyle {
    /// Duration of the lift and finish visuals.
    pub animation_duration: Duration,
    /// Opacity of a fully shown row or ghost.
    pub visible_alpha: f64,
    /// Opacity of a faded-out row or ghost.
    pub invisible_alpha: f64,
    /// Opacity of the ghost while it follows the pointer.
    pub translucent_alpha: f64,
    /// Offset of the ghost's drop shadow.
    pub shadow_offset: Vec2,
    /// Blur radius of the ghost's drop shadow.
    pub shadow_radius: f64,
    /// Opacity of the ghost's drop shadow.
    pub shadow_opacity: f32,
    /// Scale factor for the row snapshot; `0.0` means the display's native scale.
    pub snapshot_scale: f64,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self {
            animation_duration: Duration::from_millis(250),
            visible_alpha: 1.0,
            invisible_alpha: 0.0,
            translucent_alpha: 0.98,
            shadow_offset: Vec2::new(-5.0, 0.0),
            shadow_radius: 5.0,
            shadow_opacity: 0.5,
            snapshot_scale: 0.0,
        }
    }
}

impl VisualStyle {
    /// Replace the lift/finish duration.
    #[must_use]
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Replace the ghost's opacity while dragging.
    #[must_use]
    pub fn with_translucent_alpha(mut self, alpha: f64) -> Self {
        self.translucent_alpha = alpha;
        self
    }

    /// Replace the ghost's shadow.
    #[must_use]
    pub fn with_shadow(mut self, offset: Vec2, radius: f64, opacity: f32) -> Self {
        self.shadow_offset = offset;
        self.shadow_radius = radius;
        self.shadow_opacity = opacity;
        self
    }

    /// Opacity to fade from and to for a lift, as `(row, ghost)` end values.
    ///
    /// The row fades out as the ghost fades in.
    pub fn lift_alphas(&self) -> (f64, f64) {
        (self.invisible_alpha, self.visible_alpha)
    }

    /// Opacity end values for a finish, as `(row, ghost)`.
    ///
    /// The mirror of [`lift_alphas`](Self::lift_alphas).
    pub fn finish_alphas(&self) -> (f64, f64) {
        (self.visible_alpha, self.invisible_alpha)
    }
}
