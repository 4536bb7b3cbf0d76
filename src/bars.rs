//! Sound-bars widget model
//!
//! Three vertical bars pulsing between a short resting stub and the full
//! widget height, in the manner of a "now playing" level indicator. Each bar
//! keeps a randomized initial height for its resting pose, chosen once at
//! construction and never regenerated, so the widget has a stable silhouette
//! across layout passes and animation restarts.
//!
//! The model is synchronous and total: every operation runs inline on the UI
//! thread, degenerate bounds flow through the math unvalidated, and nothing
//! here returns an error. Rendering lives in
//! `crate::ui::primitives::sound_bars`; this module only owns state and time
//! arithmetic.

pub mod animation;
pub mod geometry;

use iced::time::Instant;
use iced::{Color, Rectangle, Size, color};
use rand::Rng;

use animation::{PathAnimation, cycle_duration};
use geometry::{BAR_COUNT, BarPath, bar_path, complete_rect, resting_rect};

/// Fill color for freshly created widgets.
pub const DEFAULT_BAR_COLOR: Color = color!(0x00ff00);

/// Upper bound (exclusive) of the resting-height fraction, in hundredths.
const INITIAL_HEIGHT_STEPS: u32 = 50;

/// Retained drawing state for one bar: a layout frame, a base outline, a
/// fill, and at most one attached animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    /// The full-height column this bar occupies; carries the horizontal
    /// position that [`BarPath`] deliberately omits.
    pub frame: Rectangle,
    /// Outline shown whenever no animation is attached.
    pub path: BarPath,
    pub fill: Color,
    pub animation: Option<PathAnimation>,
}

impl Shape {
    /// The outline to draw at `now`: the animation sample while one is
    /// attached, the base path otherwise.
    pub fn display_path(&self, now: Instant) -> BarPath {
        match &self.animation {
            Some(animation) => animation.sample(now),
            None => self.path,
        }
    }
}

/// One bar: a fixed random resting-height fraction plus its shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    initial_height: f32,
    shape: Shape,
}

impl Bar {
    /// Resting-height fraction in `[0, 0.5)`, fixed at construction.
    pub fn initial_height(&self) -> f32 {
        self.initial_height
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

/// Per-bar snapshot handed to the canvas painter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintedBar {
    pub frame: Rectangle,
    pub path: BarPath,
    pub fill: Color,
}

/// The widget model: exactly three bars, left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundBars {
    bars: [Bar; BAR_COUNT],
    bounds: Size,
    bar_color: Color,
    animating: bool,
}

impl SoundBars {
    /// Create an idle widget with randomized resting heights.
    ///
    /// The RNG is injected so callers can pin a seed; production code passes
    /// `rand::rng()`.
    pub fn new(bounds: Size, rng: &mut impl Rng) -> Self {
        let mut widget = Self {
            bars: std::array::from_fn(|_| Bar {
                initial_height: random_initial_height(rng),
                shape: Shape {
                    frame: Rectangle {
                        x: 0.0,
                        y: 0.0,
                        width: 0.0,
                        height: 0.0,
                    },
                    path: BarPath {
                        y: 0.0,
                        width: 0.0,
                        height: 0.0,
                    },
                    fill: DEFAULT_BAR_COLOR,
                    animation: None,
                },
            }),
            bounds,
            bar_color: DEFAULT_BAR_COLOR,
            animating: false,
        };
        widget.layout();
        tracing::debug!(
            "Sound bars created: initial heights {:?}",
            widget.bars.map(|bar| bar.initial_height)
        );
        widget
    }

    pub fn bars(&self) -> &[Bar; BAR_COUNT] {
        &self.bars
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn bar_color(&self) -> Color {
        self.bar_color
    }

    pub fn animating(&self) -> bool {
        self.animating
    }

    /// Layout hook: adopt new bounds, recompute every frame and base path,
    /// and re-issue animations if running.
    ///
    /// Animation keyframes are baked from geometry, so running bars get
    /// fresh animations targeting the new bounds. The fresh cycle starts at
    /// `now`; there is no phase continuity across layout passes.
    pub fn resize(&mut self, bounds: Size, now: Instant) {
        self.bounds = bounds;
        self.layout();
        if self.animating {
            self.attach_animations(now);
        }
    }

    /// Drive the idle/running state machine.
    ///
    /// `true` always attaches fresh animations, replacing any already
    /// attached and restarting their cycles at `now`. `false` always clears,
    /// which uncovers each bar's base path, the resting stub set by layout.
    pub fn set_animating(&mut self, animating: bool, now: Instant) {
        self.animating = animating;
        if animating {
            self.attach_animations(now);
            tracing::debug!("Sound bars animation started");
        } else {
            for bar in &mut self.bars {
                bar.shape.animation = None;
            }
            tracing::debug!("Sound bars animation stopped");
        }
    }

    /// Repaint every bar with `color`, effective immediately. Geometry and
    /// any running animation are untouched. The color is not validated.
    pub fn set_bar_color(&mut self, color: Color) {
        self.bar_color = color;
        for bar in &mut self.bars {
            bar.shape.fill = color;
        }
    }

    /// Snapshot of what each bar looks like at `now`, for the painter.
    pub fn painted(&self, now: Instant) -> [PaintedBar; BAR_COUNT] {
        std::array::from_fn(|index| {
            let bar = &self.bars[index];
            PaintedBar {
                frame: bar.shape.frame,
                path: bar.shape.display_path(now),
                fill: bar.shape.fill,
            }
        })
    }

    fn layout(&mut self) {
        for (index, bar) in self.bars.iter_mut().enumerate() {
            bar.shape.frame = complete_rect(self.bounds, index);
            bar.shape.path = bar_path(resting_rect(self.bounds, index, bar.initial_height));
        }
    }

    fn attach_animations(&mut self, now: Instant) {
        for (index, bar) in self.bars.iter_mut().enumerate() {
            let resting = bar_path(resting_rect(self.bounds, index, bar.initial_height));
            let full = bar_path(complete_rect(self.bounds, index));
            bar.shape.animation = Some(PathAnimation::new(
                resting,
                full,
                cycle_duration(bar.initial_height),
                now,
            ));
        }
    }
}

/// Draw one resting-height fraction: hundredths in `[0, 0.5)`.
fn random_initial_height(rng: &mut impl Rng) -> f32 {
    rng.random_range(0..INITIAL_HEIGHT_STEPS) as f32 / 100.0
}
