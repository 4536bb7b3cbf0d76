//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::bars::SoundBars;

pub use message::Message;
pub use state::{App, DEFAULT_WINDOW_SIZE, widget_frame};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // Load settings first so the widget starts with the persisted color
        let settings = crate::features::Settings::load();
        tracing::info!(
            "Settings loaded: dark_mode={}, bar color {}",
            settings.appearance.dark_mode,
            settings.bars.color
        );

        let window = DEFAULT_WINDOW_SIZE;
        let mut bars = SoundBars::new(widget_frame(window), &mut rand::rng());
        bars.set_bar_color(settings.bars.color.color());

        let app = Self {
            settings,
            bars,
            now: iced::time::Instant::now(),
            window,
        };

        (app, Task::none())
    }

    /// Window title reflecting the animation state
    pub fn title(&self) -> String {
        if self.bars.animating() {
            "Sound Bars - Playing".to_string()
        } else {
            "Sound Bars".to_string()
        }
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.settings.appearance.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Subscriptions for animation frames and window resizes
    pub fn subscription(&self) -> iced::Subscription<Message> {
        // Frame ticks are only needed while the widget is running
        let animation_sub =
            if subscription_logic::needs_animation_subscription(self.bars.animating()) {
                iced::window::frames().map(|_| Message::AnimationTick)
            } else {
                iced::Subscription::none()
            };

        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        iced::Subscription::batch([animation_sub, resize_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(animating: bool) -> bool {
        animating
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn frame_ticks_only_while_animating() {
        assert!(needs_animation_subscription(true));
        assert!(!needs_animation_subscription(false));
    }
}
