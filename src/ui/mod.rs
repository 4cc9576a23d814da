pub mod app;
pub mod card;
pub mod events;
pub mod footer;
pub mod header;
pub mod layout;
pub mod mvi;
pub mod quote;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
