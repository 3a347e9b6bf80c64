//! Model-View-Intent primitives for the canvas.
//!
//! ```text
//! Intent ──→ Reducer ──→ StateStore (pending) ──→ RenderLoop ──→ ViewTree
//!    ↑                                                              │
//!    └──────────────────── pointer / keyboard ──────────────────────┘
//! ```
//!
//! - **State**: an immutable snapshot, compared structurally
//! - **Intent**: a user action (paint, brush change, reset)
//! - **Reducer**: pure function producing the next snapshot

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
