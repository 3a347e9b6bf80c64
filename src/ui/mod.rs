pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod memo;
pub mod mvi;
pub mod pointer;
pub mod render;
pub mod render_loop;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod view;
