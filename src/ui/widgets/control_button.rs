//! Circular call-control button
//!
//! A colored circular hit target with a centered icon, bound to a motion
//! slot by id. Pure presentation: the spec goes in, an element comes out.

use iced::widget::{container, svg};
use iced::{Background, Border, Color, Element};

use crate::ui::theme;

/// Fixed button diameter in logical units
pub const BUTTON_SIZE: f32 = 40.0;
/// Fixed icon size in logical units
pub const ICON_SIZE: f32 = 25.0;

/// Parameters for one control button
#[derive(Debug, Clone, Copy)]
pub struct ControlButtonSpec {
    /// Motion slot id the button is bound to
    pub id: &'static str,
    /// Background color of the circle
    pub color: Color,
    /// Inline SVG glyph centered in the circle
    pub icon: &'static str,
}

/// Build a control button at the given opacity and scale
pub fn view<'a, Message: 'a>(
    spec: ControlButtonSpec,
    opacity: f32,
    scale: f32,
) -> Element<'a, Message> {
    let size = BUTTON_SIZE * scale;
    let icon_size = ICON_SIZE * scale;
    let icon_color = theme::with_opacity(theme::ISLAND_FG, opacity);
    let background = theme::with_opacity(spec.color, opacity);

    let icon = svg(svg::Handle::from_memory(spec.icon.as_bytes()))
        .width(icon_size)
        .height(icon_size)
        .style(move |_theme, _status| svg::Style {
            color: Some(icon_color),
        });

    container(icon)
        .center_x(size)
        .center_y(size)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: (size / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
