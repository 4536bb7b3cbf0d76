//! Application state definitions

use iced::Size;
use iced::time::Instant;

use crate::bars::SoundBars;
use crate::features::Settings;

/// Initial window size
pub const DEFAULT_WINDOW_SIZE: Size = Size::new(520.0, 420.0);

/// Main application state
pub struct App {
    /// Persisted user preferences
    pub settings: Settings,
    /// The sound-bars widget model
    pub bars: SoundBars,
    /// Sampling instant, refreshed by the animation tick
    pub now: Instant,
    /// Current window size, tracked so the widget frame can follow it
    pub window: Size,
}

/// Bounds handed to the widget for a window of the given size.
///
/// The widget scales with the window but keeps a floor, so shrinking the
/// window never collapses the canvas below a readable size.
pub fn widget_frame(window: Size) -> Size {
    Size::new(
        (window.width * 0.45).max(120.0),
        (window.height * 0.35).max(60.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_frame_scales_with_window() {
        let frame = widget_frame(Size::new(1000.0, 800.0));
        assert_eq!(frame.width, 450.0);
        assert_eq!(frame.height, 280.0);
    }

    #[test]
    fn widget_frame_has_a_floor() {
        let frame = widget_frame(Size::new(10.0, 10.0));
        assert_eq!(frame.width, 120.0);
        assert_eq!(frame.height, 60.0);

        let frame = widget_frame(Size::new(0.0, 0.0));
        assert_eq!(frame.width, 120.0);
        assert_eq!(frame.height, 60.0);
    }

    #[test]
    fn default_window_gets_a_proportional_frame() {
        let frame = widget_frame(DEFAULT_WINDOW_SIZE);
        assert!(frame.width > 120.0);
        assert!(frame.height > 60.0);
    }
}
