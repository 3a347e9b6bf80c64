//! Frame-driven commit loop.
//!
//! Once per frame tick the loop compares the pending snapshot with the
//! committed one. A divergent candidate is validated, committed, turned into a
//! view tree and handed to the sink. An invalid candidate is rolled back.

use crate::state::{validate, AppState, StateError};
use crate::store::StateStore;
use crate::ui::view::{ViewBuilder, ViewTree};

/// Where committed view trees go.
pub trait ViewSink {
    type Error;

    fn commit(&mut self, tree: &ViewTree) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing proposed since the last commit.
    Idle,
    /// The pending snapshot was invalid and has been discarded.
    Rejected(StateError),
    /// A new snapshot was committed and drawn.
    Rendered { render_count: u64 },
}

pub struct RenderLoop {
    store: StateStore,
    builder: ViewBuilder,
    mounted: bool,
    render_count: u64,
    rejected_count: u64,
    last_rejection: Option<StateError>,
}

impl RenderLoop {
    pub fn new(store: StateStore) -> Self {
        Self {
            store,
            builder: ViewBuilder::new(),
            mounted: false,
            render_count: 0,
            rejected_count: 0,
            last_rejection: None,
        }
    }

    pub fn tick<S: ViewSink>(&mut self, sink: &mut S) -> Result<TickOutcome, S::Error> {
        let (committed, pending) = self.store.snapshot_pair();
        if self.mounted && committed == pending {
            return Ok(TickOutcome::Idle);
        }

        if let Err(err) = validate(&pending) {
            tracing::warn!(error = %err, "Rejected pending state, rolling back");
            self.store.rollback();
            self.rejected_count += 1;
            self.last_rejection = Some(err.clone());
            if !self.mounted {
                // Nothing on screen yet: mount the committed snapshot instead.
                self.render(&committed, sink)?;
            }
            return Ok(TickOutcome::Rejected(err));
        }

        self.store.commit(pending.clone());
        self.render(&pending, sink)?;
        Ok(TickOutcome::Rendered {
            render_count: self.render_count,
        })
    }

    fn render<S: ViewSink>(&mut self, state: &AppState, sink: &mut S) -> Result<(), S::Error> {
        let tree = self.builder.build(state);
        sink.commit(&tree)?;
        self.mounted = true;
        self.render_count += 1;
        tracing::debug!("Render #{}", self.render_count);
        Ok(())
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn builder(&self) -> &ViewBuilder {
        &self.builder
    }

    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn rejected_count(&self) -> u64 {
        self.rejected_count
    }

    pub fn last_rejection(&self) -> Option<&StateError> {
        self.last_rejection.as_ref()
    }
}
