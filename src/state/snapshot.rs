//! Immutable snapshot types.
//!
//! Every container is an `Arc`-shared slice. Cloning a snapshot copies
//! pointers, and a transition only allocates the pieces it changes, so two
//! snapshots taken before and after a paint share every untouched row.
//! `PartialEq` compares by value but short-circuits on shared storage.

use std::sync::Arc;

use crate::state::color::Color;
use crate::ui::mvi::UiState;

/// Value of a single cell. `None` is an empty cell.
pub type Cell = Option<Color>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

#[derive(Debug, Clone)]
pub struct Row {
    cells: Arc<[Cell]>,
}

impl Row {
    pub fn empty(cols: usize) -> Self {
        Self {
            cells: vec![None; cols].into(),
        }
    }

    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self {
            cells: cells.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, col: usize) -> Option<Cell> {
        self.cells.get(col).copied()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True when both rows point at the same allocation.
    pub fn shares_storage(&self, other: &Row) -> bool {
        Arc::ptr_eq(&self.cells, &other.cells)
    }

    fn with_cell(&self, col: usize, value: Cell) -> Row {
        let mut cells = self.cells.to_vec();
        cells[col] = value;
        Row::from_cells(cells)
    }
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage(other) || self.cells == other.cells
    }
}

impl Eq for Row {}

#[derive(Debug, Clone)]
pub struct Board {
    rows: Arc<[Row]>,
}

impl Board {
    pub fn empty(dimensions: Dimensions) -> Self {
        let blank = Row::empty(dimensions.cols);
        Self {
            rows: vec![blank; dimensions.rows].into(),
        }
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows: rows.into() }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Row count and the width of the first row. Only meaningful for a
    /// rectangular board, which the validity gate guarantees for committed
    /// snapshots.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.rows.len(), self.rows.first().map_or(0, Row::len))
    }

    pub fn is_clear(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.cells().iter().all(Option::is_none))
    }

    pub fn shares_storage(&self, other: &Board) -> bool {
        Arc::ptr_eq(&self.rows, &other.rows)
    }

    /// Copies the row list (pointer copies only) and rebuilds the one row
    /// that changes. Returns `None` when the coordinate is off the board.
    pub(crate) fn with_cell(&self, row: usize, col: usize, value: Cell) -> Option<Board> {
        let target = self.rows.get(row)?;
        if col >= target.len() {
            return None;
        }
        let mut rows = self.rows.to_vec();
        rows[row] = target.with_cell(col, value);
        Some(Board::from_rows(rows))
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage(other) || self.rows == other.rows
    }
}

impl Eq for Board {}

#[derive(Debug, Clone)]
pub struct Palette {
    colors: Arc<[Color]>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors: colors.into(),
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn first(&self) -> Option<Color> {
        self.colors.first().copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    pub fn position(&self, color: Color) -> Option<usize> {
        self.colors.iter().position(|c| *c == color)
    }
}

impl PartialEq for Palette {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.colors, &other.colors) || self.colors == other.colors
    }
}

impl Eq for Palette {}

/// The whole application state at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub board: Board,
    pub colors: Palette,
    pub brush: Color,
}

impl UiState for AppState {}

impl AppState {
    /// Empty board, brush set to the first palette entry.
    ///
    /// An empty palette falls back to black; the validity gate rejects such a
    /// snapshot, so it never reaches the screen.
    pub fn new(dimensions: Dimensions, colors: Vec<Color>) -> Self {
        let brush = colors.first().copied().unwrap_or(Color::Black);
        Self {
            board: Board::empty(dimensions),
            colors: Palette::new(colors),
            brush,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.board.dimensions()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Dimensions::new(20, 40), Color::default_palette())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_requested_shape() {
        let board = Board::empty(Dimensions::new(3, 4));
        assert_eq!(board.dimensions(), Dimensions::new(3, 4));
        assert!(board.is_clear());
        assert_eq!(board.cell(2, 3), Some(None));
        assert_eq!(board.cell(3, 0), None);
    }

    #[test]
    fn equality_is_structural_not_identity() {
        let a = Row::from_cells(vec![Some(Color::Red), None]);
        let b = Row::from_cells(vec![Some(Color::Red), None]);
        assert!(!a.shares_storage(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn with_cell_rejects_out_of_bounds() {
        let board = Board::empty(Dimensions::new(2, 2));
        assert!(board.with_cell(2, 0, Some(Color::Red)).is_none());
        assert!(board.with_cell(0, 2, Some(Color::Red)).is_none());
    }

    #[test]
    fn default_state_uses_first_palette_color() {
        let state = AppState::default();
        assert_eq!(state.brush, Color::Black);
        assert_eq!(state.colors.len(), 6);
    }
}
