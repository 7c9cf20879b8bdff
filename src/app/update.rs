//! Message update handlers

use std::time::Instant;

use iced::Task;

use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::IslandPressed => self.island.toggle(),
            Message::AnimationTick => self.island.tick(Instant::now()),
        }
        Task::none()
    }
}
