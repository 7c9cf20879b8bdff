//! The dynamic island component
//!
//! Renders the call indicator as a stack of absolutely positioned
//! layers, each one sampled from the motion scene at the current
//! progress: the tap-sensitive rounded container, the compact-state
//! elements (call icon, timer, muted mic) and the expanded-state
//! elements (avatar, caller name, call-control buttons).

use iced::mouse::Interaction;
use iced::widget::{Space, container, image, mouse_area, stack, svg, text};
use iced::{Background, Border, Color, Element, Fill, Padding};

use crate::app::Message;
use crate::motion::{MotionScene, SlotFrame};
use crate::ui::widgets::control_button::{self, ControlButtonSpec};
use crate::ui::{icons, theme};

// Motion slot ids
pub const BOX: &str = "box";
pub const CALL_ICON: &str = "call_icon";
pub const CALL_TIME: &str = "call_time";
pub const MIC_ICON: &str = "mic_icon";
pub const CALLER_PIC: &str = "caller_pic";
pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const END_CALL: &str = "end_call";
pub const ACCEPT_CALL: &str = "accept_call";

/// Every slot id the island renders; validated against the motion
/// scene at load time
pub const SLOT_IDS: [&str; 9] = [
    BOX, CALL_ICON, CALL_TIME, MIC_ICON, CALLER_PIC, FIRST_NAME, LAST_NAME, END_CALL, ACCEPT_CALL,
];

/// Bundled caller photo shown in the avatar slot
const CALLER_PHOTO: &[u8] = include_bytes!("../../../assets/caller.png");

const CALLER_FIRST_NAME: &str = "Amelia";
const CALLER_LAST_NAME: &str = "Stone";
const CALL_TIME_TEXT: &str = "5 : 55";

// Text sizes; each label's slot must leave room for its line height
const CALL_TIME_TEXT_SIZE: f32 = 14.0;
const FIRST_NAME_TEXT_SIZE: f32 = 12.0;
const LAST_NAME_TEXT_SIZE: f32 = 14.0;

/// Explicit color configuration for the island
#[derive(Debug, Clone, Copy)]
pub struct IslandPalette {
    /// Accept-call button and avatar ring
    pub accept: Color,
    /// End-call button and muted-mic tint
    pub decline: Color,
    /// Container fill
    pub fill: Color,
    /// Icon and text color
    pub foreground: Color,
}

/// Build the island at the given interpolation progress
pub fn view(scene: &MotionScene, progress: f32, palette: IslandPalette) -> Element<'static, Message> {
    let box_frame = scene.sample(BOX, progress);
    let call_frame = scene.sample(CALL_ICON, progress);
    let time_frame = scene.sample(CALL_TIME, progress);
    let mic_frame = scene.sample(MIC_ICON, progress);
    let pic_frame = scene.sample(CALLER_PIC, progress);
    let first_frame = scene.sample(FIRST_NAME, progress);
    let last_frame = scene.sample(LAST_NAME, progress);

    let end_spec = ControlButtonSpec {
        id: END_CALL,
        color: palette.decline,
        icon: icons::CALL_END,
    };
    let accept_spec = ControlButtonSpec {
        id: ACCEPT_CALL,
        color: palette.accept,
        icon: icons::CALL,
    };
    let end_frame = scene.sample(end_spec.id, progress);
    let accept_frame = scene.sample(accept_spec.id, progress);

    stack![
        layer(&box_frame, pill(&box_frame, palette)),
        layer(&call_frame, slot_icon(&call_frame, icons::CALL, palette.foreground)),
        layer(
            &time_frame,
            slot_text(
                &time_frame,
                CALL_TIME_TEXT,
                CALL_TIME_TEXT_SIZE,
                false,
                palette.foreground
            )
        ),
        layer(&mic_frame, slot_icon(&mic_frame, icons::MIC_OFF, palette.decline)),
        layer(&pic_frame, avatar(&pic_frame, palette)),
        layer(
            &first_frame,
            slot_text(
                &first_frame,
                CALLER_FIRST_NAME,
                FIRST_NAME_TEXT_SIZE,
                false,
                palette.foreground
            )
        ),
        layer(
            &last_frame,
            slot_text(
                &last_frame,
                CALLER_LAST_NAME,
                LAST_NAME_TEXT_SIZE,
                true,
                palette.foreground
            )
        ),
        layer(
            &end_frame,
            control_button::view(end_spec, end_frame.opacity, end_frame.scale)
        ),
        layer(
            &accept_frame,
            control_button::view(accept_spec, accept_frame.opacity, accept_frame.scale)
        ),
    ]
    .width(Fill)
    .height(Fill)
    .into()
}

/// Position a slot's content at its interpolated offset
fn layer<'a>(frame: &SlotFrame, content: Element<'a, Message>) -> Element<'a, Message> {
    container(content)
        .width(Fill)
        .height(Fill)
        .padding(Padding {
            top: frame.y,
            left: frame.x,
            right: 0.0,
            bottom: 0.0,
        })
        .into()
}

/// The rounded container; tapping it toggles the island
fn pill(frame: &SlotFrame, palette: IslandPalette) -> Element<'static, Message> {
    let background = theme::with_opacity(palette.fill, frame.opacity);
    let radius = frame.radius;

    let body = container(Space::new())
        .width(frame.width)
        .height(frame.height)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: radius.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    mouse_area(body)
        .interaction(Interaction::Pointer)
        .on_press(Message::IslandPressed)
        .into()
}

/// A tinted SVG glyph sized and faded by its slot frame
fn slot_icon(frame: &SlotFrame, icon: &'static str, color: Color) -> Element<'static, Message> {
    let tint = theme::with_opacity(color, frame.opacity);

    svg(svg::Handle::from_memory(icon.as_bytes()))
        .width(frame.width * frame.scale)
        .height(frame.height * frame.scale)
        .style(move |_theme, _status| svg::Style { color: Some(tint) })
        .into()
}

/// A text label constrained to its slot frame and faded by it
fn slot_text(
    frame: &SlotFrame,
    content: &'static str,
    size: f32,
    bold: bool,
    color: Color,
) -> Element<'static, Message> {
    let label = text(content)
        .size((size * frame.scale).max(1.0))
        .width(frame.width * frame.scale)
        .height(frame.height * frame.scale)
        .color(theme::with_opacity(color, frame.opacity));

    if bold {
        label
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            })
            .into()
    } else {
        label.into()
    }
}

/// The circular caller photo with its colored ring
fn avatar(frame: &SlotFrame, palette: IslandPalette) -> Element<'static, Message> {
    let size = frame.width * frame.scale;
    let ring = theme::with_opacity(theme::ISLAND_FG, frame.opacity);
    let fill = theme::with_opacity(palette.accept, frame.opacity);

    let photo = image(image::Handle::from_bytes(CALLER_PHOTO))
        .width((size - 8.0).max(0.0))
        .height((size - 8.0).max(0.0))
        .opacity(frame.opacity);

    container(photo)
        .center_x(size)
        .center_y(size)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(fill)),
            border: Border {
                radius: (size / 2.0).into(),
                width: 2.0,
                color: ring,
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_ids_are_unique() {
        let mut ids = SLOT_IDS.to_vec();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SLOT_IDS.len());
    }

    #[test]
    fn compact_and_expanded_elements_swap_visibility() {
        let scene = MotionScene::load().unwrap();

        // At rest only the compact elements are visible
        for slot in [CALL_ICON, CALL_TIME, MIC_ICON] {
            assert_eq!(scene.sample(slot, 0.0).opacity, 1.0);
            assert_eq!(scene.sample(slot, 1.0).opacity, 0.0);
        }
        // Expanded the inverse holds
        for slot in [CALLER_PIC, FIRST_NAME, LAST_NAME, END_CALL, ACCEPT_CALL] {
            assert_eq!(scene.sample(slot, 0.0).opacity, 0.0);
            assert_eq!(scene.sample(slot, 1.0).opacity, 1.0);
        }
        // The container itself never fades
        assert_eq!(scene.sample(BOX, 0.0).opacity, 1.0);
        assert_eq!(scene.sample(BOX, 1.0).opacity, 1.0);
    }

    #[test]
    fn text_slots_leave_room_for_their_labels() {
        let scene = MotionScene::load().unwrap();
        for (slot, size) in [
            (CALL_TIME, CALL_TIME_TEXT_SIZE),
            (FIRST_NAME, FIRST_NAME_TEXT_SIZE),
            (LAST_NAME, LAST_NAME_TEXT_SIZE),
        ] {
            for progress in [0.0, 1.0] {
                let frame = scene.sample(slot, progress);
                assert!(
                    frame.height >= size,
                    "slot '{slot}' is too short for its {size}px label"
                );
                assert!(frame.width > 0.0);
            }
        }
    }

    #[test]
    fn control_button_slots_match_the_fixed_size() {
        let scene = MotionScene::load().unwrap();
        for slot in [END_CALL, ACCEPT_CALL] {
            let frame = scene.sample(slot, 1.0);
            assert_eq!(frame.width, control_button::BUTTON_SIZE);
            assert_eq!(frame.height, control_button::BUTTON_SIZE);
        }
    }
}
