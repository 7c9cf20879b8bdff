//! Application view rendering

use iced::widget::container;
use iced::{Background, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::components::island::{self, IslandPalette};
use crate::ui::theme;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        // Colors are handed to the island explicitly rather than looked
        // up from inside it
        let palette = IslandPalette {
            accept: theme::ACCEPT_GREEN,
            decline: theme::DECLINE_RED,
            fill: theme::ISLAND_FILL,
            foreground: theme::ISLAND_FG,
        };

        let island = island::view(&self.island.scene, self.island.progress(), palette);

        container(island)
            .width(Fill)
            .height(Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(theme::BACKDROP)),
                ..Default::default()
            })
            .into()
    }
}
