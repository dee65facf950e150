use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// All state transitions go through here. Side effects (network, clipboard)
/// happen in the caller, never in `reduce`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
