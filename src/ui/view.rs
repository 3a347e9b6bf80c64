//! View tree built from a snapshot.
//!
//! The tree mirrors the screen: a heading, one node per board row with one
//! node per cell, the palette picker, and the current brush. Nodes are `Arc`s
//! so an unchanged subtree is handed from one tree to the next without being
//! rebuilt.

use std::sync::Arc;

use crate::state::{AppState, Cell, Color, Dimensions, Palette, Row};
use crate::ui::memo::Memo;

pub const HEADING: &str = "Pixel Paint";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub row: usize,
    pub col: usize,
    pub color: Cell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub index: usize,
    pub cells: Vec<Arc<CellView>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchView {
    pub index: usize,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView {
    pub swatches: Vec<SwatchView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTree {
    pub heading: &'static str,
    pub dimensions: Dimensions,
    pub rows: Vec<Arc<RowView>>,
    pub picker: Arc<PickerView>,
    pub brush: Color,
}

type CellKey = (usize, usize, Cell);

/// Builds view trees, skipping every node whose input slice is unchanged
/// since the previous build.
#[derive(Default)]
pub struct ViewBuilder {
    app_evaluations: u64,
    rows: Vec<Memo<(usize, Row), Arc<RowView>>>,
    cells: Vec<Vec<Memo<CellKey, Arc<CellView>>>>,
    picker: Memo<Palette, Arc<PickerView>>,
}

impl ViewBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(&mut self, state: &AppState) -> ViewTree {
        self.app_evaluations += 1;

        let board_rows = state.board.rows();
        self.rows.resize_with(board_rows.len(), Memo::new);
        self.cells.resize_with(board_rows.len(), Vec::new);

        let rows = board_rows
            .iter()
            .enumerate()
            .zip(self.rows.iter_mut().zip(self.cells.iter_mut()))
            .map(|((index, row), (row_memo, cell_memos))| {
                row_memo.get_or_build((index, row.clone()), |(index, row)| {
                    Arc::new(build_row(*index, row, cell_memos))
                })
            })
            .collect();

        let picker = self
            .picker
            .get_or_build(state.colors.clone(), |colors| Arc::new(build_picker(colors)));

        ViewTree {
            heading: HEADING,
            dimensions: state.dimensions(),
            rows,
            picker,
            brush: state.brush,
        }
    }

    pub fn app_evaluations(&self) -> u64 {
        self.app_evaluations
    }

    pub fn row_evaluations(&self, row: usize) -> u64 {
        self.rows.get(row).map_or(0, Memo::evaluations)
    }

    pub fn cell_evaluations(&self, row: usize, col: usize) -> u64 {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .map_or(0, Memo::evaluations)
    }

    pub fn picker_evaluations(&self) -> u64 {
        self.picker.evaluations()
    }
}

fn build_row(index: usize, row: &Row, memos: &mut Vec<Memo<CellKey, Arc<CellView>>>) -> RowView {
    memos.resize_with(row.len(), Memo::new);
    let cells = row
        .cells()
        .iter()
        .enumerate()
        .zip(memos.iter_mut())
        .map(|((col, value), memo)| {
            memo.get_or_build((index, col, *value), |&(row, col, color)| {
                Arc::new(CellView { row, col, color })
            })
        })
        .collect();
    RowView { index, cells }
}

fn build_picker(colors: &Palette) -> PickerView {
    let swatches = colors
        .colors()
        .iter()
        .enumerate()
        .map(|(index, color)| SwatchView {
            index,
            color: *color,
        })
        .collect();
    PickerView { swatches }
}
