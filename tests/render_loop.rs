mod common;

use common::{board, Harness};
use pixelboard::state::{
    change_brush, is_valid, paint_cell, AppState, Board, Color, Palette, Row, StateError,
};
use pixelboard::ui::render_loop::TickOutcome;

#[test]
fn first_tick_mounts_initial_state() {
    let mut h = Harness::small();
    assert_eq!(h.tick(), TickOutcome::Rendered { render_count: 1 });
    assert_eq!(h.sink.trees.len(), 1);
    assert_eq!(h.sink.trees[0].rows.len(), 2);
}

#[test]
fn idle_ticks_do_not_render() {
    let mut h = Harness::small();
    h.tick();
    assert_eq!(h.tick(), TickOutcome::Idle);
    assert_eq!(h.tick(), TickOutcome::Idle);
    assert_eq!(h.render_loop.render_count(), 1);
}

#[test]
fn proposal_is_committed_on_next_tick() {
    let mut h = Harness::small();
    h.tick();

    let next = paint_cell(&h.store.read(), 1, 0, Color::Red);
    h.store.propose(next.clone());
    assert_ne!(h.store.read(), next);

    assert_eq!(h.tick(), TickOutcome::Rendered { render_count: 2 });
    assert_eq!(h.store.read(), next);
    assert!(!h.store.is_dirty());
}

#[test]
fn structurally_equal_proposal_stays_idle() {
    let mut h = Harness::small();
    h.tick();

    // Same content, fresh allocations.
    let current = h.store.read();
    let rebuilt = AppState {
        board: board(&[&[None, None], &[None, None]]),
        colors: Palette::new(vec![Color::Black, Color::Red]),
        brush: current.brush,
    };
    assert!(!rebuilt.board.shares_storage(&current.board));
    h.store.propose(rebuilt);

    assert_eq!(h.tick(), TickOutcome::Idle);
}

#[test]
fn ragged_board_is_rejected_and_rolled_back() {
    let mut h = Harness::small();
    h.tick();
    let committed = h.store.read();

    let ragged = AppState {
        board: Board::from_rows(vec![Row::empty(2), Row::empty(1)]),
        ..committed.clone()
    };
    assert!(!is_valid(&ragged));
    h.store.propose(ragged);

    let outcome = h.tick();
    assert!(matches!(outcome, TickOutcome::Rejected(StateError::InvalidCandidate { .. })));
    assert_eq!(h.store.read(), committed);
    assert_eq!(h.store.pending(), committed);
    assert_eq!(h.render_loop.rejected_count(), 1);
    assert!(h.render_loop.last_rejection().is_some());
    assert_eq!(h.sink.trees.len(), 1);
}

#[test]
fn board_without_rows_is_rejected() {
    let mut h = Harness::small();
    h.tick();
    let committed = h.store.read();
    h.store.propose(AppState {
        board: Board::from_rows(Vec::new()),
        ..committed.clone()
    });

    match h.tick() {
        TickOutcome::Rejected(StateError::InvalidCandidate { reason }) => {
            assert!(reason.contains("no rows"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(h.store.read(), committed);
}

#[test]
fn brush_outside_palette_is_rejected() {
    let mut h = Harness::small();
    h.tick();
    h.store.propose(change_brush(&h.store.read(), Color::Green));

    assert!(matches!(h.tick(), TickOutcome::Rejected(_)));
    assert_eq!(h.store.read().brush, Color::Black);
}

#[test]
fn loop_keeps_running_after_rejection() {
    let mut h = Harness::small();
    h.tick();
    h.store.propose(change_brush(&h.store.read(), Color::Green));
    h.tick();

    h.store.propose(paint_cell(&h.store.read(), 0, 0, Color::Black));
    assert_eq!(h.tick(), TickOutcome::Rendered { render_count: 2 });
    assert_eq!(h.store.read().board.cell(0, 0), Some(Some(Color::Black)));
}

#[test]
fn invalid_proposal_before_first_frame_still_mounts() {
    let mut h = Harness::small();
    h.store.propose(change_brush(&h.store.read(), Color::Green));

    assert!(matches!(h.tick(), TickOutcome::Rejected(_)));
    assert_eq!(h.sink.trees.len(), 1);
    assert_eq!(h.tick(), TickOutcome::Idle);
}
