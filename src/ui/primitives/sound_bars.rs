//! Sound-bars canvas primitive
//!
//! Paints a snapshot of the sound-bars model using iced's Canvas. Rendering
//! only: state and timing live in the model, which hands over plain
//! [`PaintedBar`] data, so the painter never samples animations itself.
//!
//! Each bar is drawn by translating to the bar's frame origin and then
//! filling the bar's local-space outline, mirroring how the model splits
//! horizontal placement (the frame) from vertical pose (the path).

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Element, Point, Radians, Renderer, Size, Theme, Vector, mouse};

use crate::bars::PaintedBar;
use crate::bars::geometry::{BAR_COUNT, BarPath, CORNER_RADIUS};

/// Canvas program rendering one frame's worth of bars.
#[derive(Debug, Clone, Copy)]
pub struct SoundBarsCanvas {
    bars: [PaintedBar; BAR_COUNT],
}

impl SoundBarsCanvas {
    pub fn new(bars: [PaintedBar; BAR_COUNT]) -> Self {
        Self { bars }
    }
}

impl<Message> Program<Message> for SoundBarsCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for bar in &self.bars {
            // Degenerate bounds yield unfillable outlines; skip quietly
            if bar.path.width <= 0.0 || bar.path.height <= 0.0 {
                continue;
            }

            let outline = rounded_top_path(&bar.path);
            frame.with_save(|frame| {
                frame.translate(Vector::new(bar.frame.x, bar.frame.y));
                frame.fill(&outline, bar.fill);
            });
        }

        vec![frame.into_geometry()]
    }
}

/// Build the bar outline: square bottom corners, top corners rounded by
/// [`CORNER_RADIUS`] (clamped so tiny bars stay well formed).
fn rounded_top_path(path: &BarPath) -> Path {
    let radius = CORNER_RADIUS.min(path.width / 2.0).min(path.height);
    let top = path.y;
    let bottom = path.y + path.height;
    let right = path.width;

    Path::new(|builder| {
        builder.move_to(Point::new(0.0, bottom));
        builder.line_to(Point::new(0.0, top + radius));
        builder.arc(iced::widget::canvas::path::Arc {
            center: Point::new(radius, top + radius),
            radius,
            start_angle: Radians(PI),
            end_angle: Radians(PI + FRAC_PI_2),
        });
        builder.line_to(Point::new(right - radius, top));
        builder.arc(iced::widget::canvas::path::Arc {
            center: Point::new(right - radius, top + radius),
            radius,
            start_angle: Radians(PI + FRAC_PI_2),
            end_angle: Radians(TAU),
        });
        builder.line_to(Point::new(right, bottom));
        builder.close();
    })
}

/// Create a sound-bars canvas element sized to the widget's bounds.
pub fn view_sound_bars<'a, Message: 'a>(
    bars: [PaintedBar; BAR_COUNT],
    size: Size,
) -> Element<'a, Message> {
    Canvas::new(SoundBarsCanvas::new(bars))
        .width(size.width)
        .height(size.height)
        .into()
}
