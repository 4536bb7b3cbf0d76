//! Bar layout math
//!
//! Pure functions mapping widget bounds to per-bar rectangles, plus the
//! local-space path description each bar's shape carries.
//!
//! # Coordinate convention
//!
//! A bar's shape frame is always the full-height "complete" rectangle for its
//! slot, so the frame alone carries the horizontal position. The path inside
//! that frame is described in local coordinates: x starts at 0, while y keeps
//! its absolute value (the frame's own y is 0, so the two agree vertically).
//! Collapsing this into absolute path coordinates would break animation
//! retargeting on resize, so [`BarPath`] never stores an x origin.

use iced::{Rectangle, Size};

/// Number of bars in the widget. Fixed; the layout math assumes it.
pub const BAR_COUNT: usize = 3;

/// Horizontal gap between bars, and the slack subtracted from the total width.
pub const MARGIN: f32 = 1.0;

/// Radius of the two rounded top corners of every bar path.
pub const CORNER_RADIUS: f32 = 1.0;

/// Width of a single bar within the given bounds.
///
/// Degenerate bounds (narrower than `2 * MARGIN`) produce a zero or negative
/// width; callers render nothing sensible but never fail.
pub fn bar_width(bounds: Size) -> f32 {
    (bounds.width - 2.0 * MARGIN) / BAR_COUNT as f32
}

/// Horizontal origin of bar `index` (0-based, left to right).
pub fn bar_x(bounds: Size, index: usize) -> f32 {
    index as f32 * (bar_width(bounds) + MARGIN)
}

/// Full-height rectangle for bar `index`: the bar's frame and the tall
/// extreme of its animation.
pub fn complete_rect(bounds: Size, index: usize) -> Rectangle {
    Rectangle {
        x: bar_x(bounds, index),
        y: 0.0,
        width: bar_width(bounds),
        height: bounds.height,
    }
}

/// Bottom-anchored rectangle for bar `index` at height fraction `fraction`:
/// the short extreme of the animation and the shape shown when idle.
pub fn resting_rect(bounds: Size, index: usize, fraction: f32) -> Rectangle {
    let height = bounds.height * fraction;
    Rectangle {
        x: bar_x(bounds, index),
        y: bounds.height - height,
        width: bar_width(bounds),
        height,
    }
}

/// A bar outline in shape-local coordinates: a `width` x `height` rectangle
/// whose top edge sits at `y`, with the two top corners rounded by
/// [`CORNER_RADIUS`] and the bottom corners left square.
///
/// The x origin is implicitly 0 (see the module docs); the owning shape's
/// frame supplies the horizontal offset at paint time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPath {
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BarPath {
    /// Linear interpolation between two bar outlines.
    ///
    /// With a constant corner radius this is pointwise identical to
    /// interpolating the outline vertices themselves, so keyframe morphs can
    /// work on these three fields alone.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            y: self.y + (other.y - self.y) * t,
            width: self.width + (other.width - self.width) * t,
            height: self.height + (other.height - self.height) * t,
        }
    }
}

/// Convert a layout rectangle into its local-space path description:
/// x reset to 0, y and size preserved.
pub fn bar_path(rect: Rectangle) -> BarPath {
    BarPath {
        y: rect.y,
        width: rect.width,
        height: rect.height,
    }
}
