//! Shared helpers for canvas integration tests.

#![allow(dead_code)]

use std::convert::Infallible;

use pixelboard::state::{AppState, Board, Color, Dimensions, Row};
use pixelboard::store::StateStore;
use pixelboard::ui::app::App;
use pixelboard::ui::layout::HitTarget;
use pixelboard::ui::render_loop::{RenderLoop, TickOutcome, ViewSink};
use pixelboard::ui::view::ViewTree;

/// Sink that keeps every committed tree.
#[derive(Default)]
pub struct RecordingSink {
    pub trees: Vec<ViewTree>,
}

impl ViewSink for RecordingSink {
    type Error = Infallible;

    fn commit(&mut self, tree: &ViewTree) -> Result<(), Self::Error> {
        self.trees.push(tree.clone());
        Ok(())
    }
}

/// Store, render loop, app and sink wired together the way the runtime does.
pub struct Harness {
    pub store: StateStore,
    pub render_loop: RenderLoop,
    pub app: App,
    pub sink: RecordingSink,
}

impl Harness {
    pub fn new(initial: AppState) -> Self {
        let store = StateStore::new(initial).expect("valid initial state");
        Self {
            render_loop: RenderLoop::new(store.clone()),
            app: App::new(store.clone()),
            store,
            sink: RecordingSink::default(),
        }
    }

    /// 2x2 board, palette [black, red], brush black.
    pub fn small() -> Self {
        Self::new(AppState::new(
            Dimensions::new(2, 2),
            vec![Color::Black, Color::Red],
        ))
    }

    pub fn tick(&mut self) -> TickOutcome {
        match self.render_loop.tick(&mut self.sink) {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }

    pub fn click(&mut self, target: HitTarget) {
        self.app.pointer_down(Some(target));
        self.app.pointer_up(Some(target));
    }
}

pub fn cell(row: usize, col: usize) -> HitTarget {
    HitTarget::Cell { row, col }
}

pub fn board(rows: &[&[Option<Color>]]) -> Board {
    Board::from_rows(rows.iter().map(|row| Row::from_cells(row.to_vec())).collect())
}
