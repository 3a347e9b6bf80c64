use crate::state::{AppState, PaintIntent, PaintReducer};
use crate::store::StateStore;
use crate::ui::layout::{CanvasLayout, HitTarget};
use crate::ui::mvi::Reducer;
use crate::ui::pointer::{PointerEvent, PointerState};

/// Input-side application state: the store handle, the pointer, and the
/// layout of the last drawn frame for hit-testing.
///
/// Every handler reads the committed snapshot at the moment it runs and
/// proposes its successor. Nothing here is committed directly.
pub struct App {
    store: StateStore,
    pointer: PointerState,
    layout: Option<CanvasLayout>,
    should_quit: bool,
}

impl App {
    pub fn new(store: StateStore) -> Self {
        Self {
            store,
            pointer: PointerState::new(),
            layout: None,
            should_quit: false,
        }
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn is_pressed(&self) -> bool {
        self.pointer.is_pressed()
    }

    pub fn layout(&self) -> Option<&CanvasLayout> {
        self.layout.as_ref()
    }

    pub fn set_layout(&mut self, layout: Option<CanvasLayout>) {
        self.layout = layout;
    }

    pub fn pointer_down(&mut self, target: Option<HitTarget>) {
        let events = self.pointer.press(target);
        self.deliver(events);
    }

    pub fn pointer_up(&mut self, target: Option<HitTarget>) {
        let events = self.pointer.release(target);
        self.deliver(events);
    }

    pub fn pointer_motion(&mut self, target: Option<HitTarget>) {
        let events = self.pointer.motion(target);
        self.deliver(events);
    }

    fn deliver(&mut self, events: Vec<PointerEvent>) {
        for event in events {
            match event {
                PointerEvent::Click(target) => self.activate(target),
                PointerEvent::Enter {
                    target: HitTarget::Cell { row, col },
                    pressed: true,
                } => self.paint(row, col),
                PointerEvent::Enter { .. } => {}
            }
        }
    }

    /// Click on a target.
    pub fn activate(&mut self, target: HitTarget) {
        match target {
            HitTarget::Cell { row, col } => self.paint(row, col),
            HitTarget::Swatch(index) => self.select_swatch(index),
            HitTarget::Reset => self.reset(),
        }
    }

    /// Paint a cell with the brush of the committed snapshot.
    pub fn paint(&mut self, row: usize, col: usize) {
        tracing::debug!(row, col, "cell activated");
        self.dispatch_with(|state| PaintIntent::PaintCell {
            row,
            col,
            color: state.brush,
        });
    }

    /// Switch the brush to the palette entry at `index`. Out-of-range indices
    /// are ignored.
    pub fn select_swatch(&mut self, index: usize) {
        let state = self.store.read();
        let Some(color) = state.colors.get(index) else {
            return;
        };
        tracing::debug!(%color, "brush changed");
        self.propose(state, PaintIntent::ChangeBrush(color));
    }

    pub fn reset(&mut self) {
        tracing::debug!("board reset");
        self.dispatch_with(|_| PaintIntent::Reset);
    }

    fn dispatch_with(&self, intent: impl FnOnce(&AppState) -> PaintIntent) {
        let state = self.store.read();
        let intent = intent(&state);
        self.propose(state, intent);
    }

    fn propose(&self, state: AppState, intent: PaintIntent) {
        self.store.propose(PaintReducer::reduce(state, intent));
    }
}
