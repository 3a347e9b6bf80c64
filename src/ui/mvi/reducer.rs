use super::intent::Intent;
use super::state::UiState;

/// The only place snapshots are derived from other snapshots.
///
/// `reduce` must be pure: (State, Intent) -> State. Storing the result is
/// the caller's job.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
