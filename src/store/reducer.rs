//! Reducer trait.

use super::intent::Intent;
use super::state::StoreState;

/// Pure state-transition function of a resource store.
///
/// A reducer pairs one state type with its intent enum and folds each
/// intent into the next state. Network and timer effects stay in the
/// action layer; a reducer never performs I/O, so every transition is
/// testable as a plain value-in, value-out call.
pub trait Reducer {
    type State: StoreState;
    type Intent: Intent;

    /// Fold `intent` into `state`, returning the successor state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
