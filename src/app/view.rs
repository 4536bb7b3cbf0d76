//! Main application view

use iced::widget::{Space, button, column, container, row, svg, text, toggler};
use iced::{Alignment, Color, Element, Fill, Padding};

use crate::features::BarColor;
use crate::ui::primitives::sound_bars;
use crate::ui::{icons, theme};

use super::state::widget_frame;
use super::{App, Message};

impl App {
    /// Single-screen layout: widget panel, transport control, swatches,
    /// appearance toggle
    pub fn view(&self) -> Element<'_, Message> {
        let frame = widget_frame(self.window);

        let panel = container(sound_bars::view_sound_bars(
            self.bars.painted(self.now),
            frame,
        ))
        .padding(24)
        .style(theme::widget_panel);

        let content = column![
            panel,
            Space::new().height(24),
            transport_button(self.bars.animating()),
            Space::new().height(28),
            swatch_row(self.settings.bars.color),
            Space::new().height(18),
            appearance_row(self.settings.appearance.dark_mode),
        ]
        .align_x(Alignment::Center);

        container(content)
            .width(Fill)
            .height(Fill)
            .center_x(Fill)
            .center_y(Fill)
            .style(theme::main_content)
            .into()
    }
}

/// Round play/stop control driving the widget's animation state
fn transport_button(animating: bool) -> Element<'static, Message> {
    let icon = if animating { icons::STOP } else { icons::PLAY };

    let btn_size = 56.0;
    let icon_size = 24.0;
    let inner_padding = (btn_size - icon_size) / 2.0;
    // Offset to visually center the triangle (play icon is not symmetric)
    let offset = if animating { 0.0 } else { 2.0 };

    button(
        container(
            svg(svg::Handle::from_memory(icon.as_bytes()))
                .width(icon_size)
                .height(icon_size)
                .style(|_theme, _status| svg::Style {
                    color: Some(Color::WHITE),
                }),
        )
        .padding(Padding {
            top: inner_padding,
            bottom: inner_padding,
            left: inner_padding + offset,
            right: inner_padding - offset,
        }),
    )
    .padding(0)
    .width(btn_size)
    .height(btn_size)
    .style(move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => theme::ACCENT_PINK_HOVER,
            _ => theme::ACCENT_PINK,
        };
        button::Style {
            background: Some(iced::Background::Color(bg)),
            border: iced::Border {
                radius: (btn_size / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .on_press(Message::ToggleAnimating)
    .into()
}

/// Color swatches exercising the widget's repaint-on-recolor path
fn swatch_row(selected: BarColor) -> Element<'static, Message> {
    let mut swatches = row![].spacing(10).align_y(Alignment::Center);
    for &choice in BarColor::all() {
        let is_selected = choice == selected;
        swatches = swatches.push(
            button(Space::new())
                .padding(0)
                .width(22)
                .height(22)
                .style(move |theme, status| {
                    theme::swatch_button(theme, status, choice.color(), is_selected)
                })
                .on_press(Message::SetBarColor(choice)),
        );
    }

    column![
        text("Bar color").size(12).style(|theme| text::Style {
            color: Some(theme::text_muted(theme))
        }),
        Space::new().height(8),
        swatches,
    ]
    .align_x(Alignment::Center)
    .into()
}

/// Dark/light appearance toggle
fn appearance_row(dark_mode: bool) -> Element<'static, Message> {
    row![
        text("Dark mode").size(13).style(|theme| text::Style {
            color: Some(theme::text_muted(theme))
        }),
        Space::new().width(10),
        toggler(dark_mode).on_toggle(Message::SetDarkMode).size(18),
    ]
    .align_y(Alignment::Center)
    .into()
}
