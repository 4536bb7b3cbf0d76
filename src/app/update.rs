//! Message update handlers

use iced::Task;
use iced::time::Instant;

use super::state::widget_frame;
use super::{App, Message};

impl App {
    /// Handle messages
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleAnimating => {
                let animating = !self.bars.animating();
                self.now = Instant::now();
                self.bars.set_animating(animating, self.now);
                tracing::info!(
                    "Sound bars {}",
                    if animating { "started" } else { "stopped" }
                );
                Task::none()
            }
            Message::SetBarColor(choice) => {
                self.settings.bars.color = choice;
                self.bars.set_bar_color(choice.color());
                tracing::info!("Bar color changed to: {}", choice);
                Task::perform(async { Message::SaveSettings }, |m| m)
            }
            Message::SetDarkMode(enabled) => {
                self.settings.appearance.dark_mode = enabled;
                tracing::info!("Dark mode: {}", enabled);
                Task::perform(async { Message::SaveSettings }, |m| m)
            }
            Message::AnimationTick => {
                self.now = Instant::now();
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window = size;
                self.now = Instant::now();
                self.bars.resize(widget_frame(size), self.now);
                Task::none()
            }
            Message::SaveSettings => {
                if let Err(e) = self.settings.save() {
                    tracing::error!("Failed to save settings: {}", e);
                } else {
                    tracing::info!("Settings saved successfully");
                }
                Task::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DEFAULT_WINDOW_SIZE;
    use crate::bars::SoundBars;
    use crate::features::{BarColor, Settings};
    use iced::Size;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app() -> App {
        let mut rng = StdRng::seed_from_u64(1);
        App {
            settings: Settings::default(),
            bars: SoundBars::new(widget_frame(DEFAULT_WINDOW_SIZE), &mut rng),
            now: Instant::now(),
            window: DEFAULT_WINDOW_SIZE,
        }
    }

    #[test]
    fn toggle_flips_animation_state() {
        let mut app = app();
        assert!(!app.bars.animating());

        let _ = app.update(Message::ToggleAnimating);
        assert!(app.bars.animating());

        let _ = app.update(Message::ToggleAnimating);
        assert!(!app.bars.animating());
    }

    #[test]
    fn window_resize_relayouts_the_widget() {
        let mut app = app();
        let size = Size::new(900.0, 700.0);

        let _ = app.update(Message::WindowResized(size));

        assert_eq!(app.window, size);
        assert_eq!(app.bars.bounds(), widget_frame(size));
    }

    #[test]
    fn color_choice_updates_settings_and_widget() {
        let mut app = app();

        let _ = app.update(Message::SetBarColor(BarColor::Amber));

        assert_eq!(app.settings.bars.color, BarColor::Amber);
        assert_eq!(app.bars.bar_color(), BarColor::Amber.color());
    }

    #[test]
    fn dark_mode_updates_settings() {
        let mut app = app();
        assert!(app.settings.appearance.dark_mode);

        let _ = app.update(Message::SetDarkMode(false));
        assert!(!app.settings.appearance.dark_mode);
    }

    #[test]
    fn tick_refreshes_the_sampling_instant() {
        let mut app = app();
        let before = app.now;

        let _ = app.update(Message::AnimationTick);
        assert!(app.now >= before);
    }
}
