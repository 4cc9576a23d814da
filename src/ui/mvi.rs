//! Model-View-Intent primitives for the UI layer.
//!
//! Unidirectional data flow: intents (key presses, fetch results) go through
//! a pure reducer that produces the next state; the view renders state and
//! nothing else.

/// Marker trait for UI state objects.
///
/// States are immutable snapshots: cloned to produce successors, comparable
/// to detect changes, self-contained for rendering.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions and system events that can change
/// state.
pub trait Intent: Send + 'static {}

/// Transforms state based on intents. The only place state transitions
/// happen; must be a pure function with no side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
