//! Application messages

use iced::Size;

use crate::features::BarColor;

/// Messages produced by the UI and subscriptions
#[derive(Debug, Clone)]
pub enum Message {
    /// Flip the widget between idle and running
    ToggleAnimating,
    /// Repaint the bars with a new fill color
    SetBarColor(BarColor),
    /// Switch between dark and light appearance
    SetDarkMode(bool),
    /// Compositor frame callback while the widget is running
    AnimationTick,
    /// The window changed size; the widget frame follows it
    WindowResized(Size),
    /// Persist current settings to disk
    SaveSettings,
}
