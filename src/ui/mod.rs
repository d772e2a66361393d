pub mod app;
pub mod status_panel;
pub mod quest_panel;
pub mod chat_panel;
pub mod wish_modal;
pub mod penalty_screen;
pub mod notification;

pub mod settings;
pub mod settings_io;
