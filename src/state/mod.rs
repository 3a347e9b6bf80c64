//! Canvas state: snapshot types, transitions and the validity gate.

mod color;
mod error;
mod snapshot;
mod transition;
mod validate;

pub use color::{Color, ParseColorError};
pub use error::StateError;
pub use snapshot::{AppState, Board, Cell, Dimensions, Palette, Row};
pub use transition::{change_brush, paint_cell, reset, PaintIntent, PaintReducer};
pub use validate::{is_valid, validate};
