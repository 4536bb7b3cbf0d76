//! Sound Bars - an animated three-bar sound level indicator
//! Built with iced, with canvas-drawn bars and a minimal host screen

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod bars;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(app::DEFAULT_WINDOW_SIZE)
        .antialiasing(true)
        .run()
}
