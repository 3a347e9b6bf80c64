//! Shared committed/pending snapshot slots.
//!
//! The store is the only shared mutable thing in the application. Input
//! handlers read the committed snapshot and propose a replacement; the render
//! loop is the only caller that commits or rolls back.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::state::{validate, AppState, StateError};

struct Slots {
    committed: AppState,
    pending: AppState,
}

/// Cloneable handle to the committed and pending snapshots.
#[derive(Clone)]
pub struct StateStore {
    inner: Arc<RwLock<Slots>>,
}

impl StateStore {
    /// Create a store whose committed and pending slots both hold `initial`.
    ///
    /// Fails if `initial` does not pass the validity gate, so the committed
    /// slot is valid from the start.
    pub fn new(initial: AppState) -> Result<Self, StateError> {
        validate(&initial)?;
        Ok(Self {
            inner: Arc::new(RwLock::new(Slots {
                committed: initial.clone(),
                pending: initial,
            })),
        })
    }

    /// The last committed snapshot.
    pub fn read(&self) -> AppState {
        self.inner.read().committed.clone()
    }

    /// The most recently proposed snapshot, committed or not.
    pub fn pending(&self) -> AppState {
        self.inner.read().pending.clone()
    }

    /// Replace the pending snapshot wholesale.
    pub fn propose(&self, next: AppState) {
        self.inner.write().pending = next;
    }

    pub fn is_dirty(&self) -> bool {
        let slots = self.inner.read();
        slots.committed != slots.pending
    }

    /// Committed and pending, read under one lock.
    pub(crate) fn snapshot_pair(&self) -> (AppState, AppState) {
        let slots = self.inner.read();
        (slots.committed.clone(), slots.pending.clone())
    }

    pub(crate) fn commit(&self, snapshot: AppState) {
        self.inner.write().committed = snapshot;
    }

    pub(crate) fn rollback(&self) {
        let mut slots = self.inner.write();
        slots.pending = slots.committed.clone();
    }
}
