//! Component trait: the unit a container composes.

use super::dispatch::Dispatcher;
use super::intent::Intent;
use super::state::UiState;
use crate::ui::node::Node;

/// A self-contained piece of UI with its own state, intents and view.
///
/// A component knows nothing about its siblings or its parent. Containers
/// are components too, so trees of any depth compose from the same three
/// functions.
pub trait Component {
    /// State owned by whoever holds this component.
    type State: UiState;

    /// Intents the view emits and `update` consumes.
    type Action: Intent;

    /// Read-only data handed to `view` by the parent.
    type Context: 'static;

    /// Initial state.
    fn init(&self) -> Self::State;

    /// Pure state transition.
    fn update(&self, action: Self::Action, state: Self::State) -> Self::State;

    /// Describe the component for the given context.
    ///
    /// Event handlers attached to the returned node send their intents
    /// through `dispatch`.
    fn view(
        &self,
        context: &Self::Context,
        dispatch: &Dispatcher<Self::Action>,
        state: &Self::State,
    ) -> Node;
}
