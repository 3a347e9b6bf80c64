//! Terminal pixel-painting canvas.
//!
//! Input handlers propose immutable snapshots to a [`store::StateStore`]; a
//! frame-driven [`ui::render_loop::RenderLoop`] validates and commits them and
//! rebuilds a memoized view tree that is drawn with ratatui.

pub mod cli;
pub mod config;
pub mod logging;
pub mod shutdown;
pub mod state;
pub mod store;
pub mod ui;
