//! Pure state transitions.
//!
//! Each function takes a snapshot by reference and returns a new one. Nothing
//! is mutated in place, and any part of the input that the transition does not
//! touch is shared with the output.

use crate::state::color::Color;
use crate::state::snapshot::{AppState, Board};
use crate::ui::mvi::{Intent, Reducer};

/// Paints one cell. Off-board coordinates leave the snapshot unchanged.
pub fn paint_cell(state: &AppState, row: usize, col: usize, color: Color) -> AppState {
    match state.board.with_cell(row, col, Some(color)) {
        Some(board) => AppState {
            board,
            ..state.clone()
        },
        None => {
            tracing::debug!(row, col, "paint outside the board ignored");
            state.clone()
        }
    }
}

/// Swaps the brush. Palette membership is checked by the validity gate.
pub fn change_brush(state: &AppState, color: Color) -> AppState {
    AppState {
        brush: color,
        ..state.clone()
    }
}

/// Clears the board, keeping its dimensions, the palette and the brush.
pub fn reset(state: &AppState) -> AppState {
    if state.board.is_clear() {
        return state.clone();
    }
    let dimensions = state.board.dimensions();
    AppState {
        board: Board::empty(dimensions),
        ..state.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintIntent {
    PaintCell { row: usize, col: usize, color: Color },
    ChangeBrush(Color),
    Reset,
}

impl Intent for PaintIntent {}

pub struct PaintReducer;

impl Reducer for PaintReducer {
    type State = AppState;
    type Intent = PaintIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PaintIntent::PaintCell { row, col, color } => paint_cell(&state, row, col, color),
            PaintIntent::ChangeBrush(color) => change_brush(&state, color),
            PaintIntent::Reset => reset(&state),
        }
    }
}
