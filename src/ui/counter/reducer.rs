use crate::ui::counter::intent::CounterAction;
use crate::ui::counter::state::CounterState;
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterAction::Increment => CounterState::new(state.count.saturating_add(1)),
            CounterAction::Decrement => CounterState::new(state.count.saturating_sub(1)),
            CounterAction::Reset => CounterState::default(),
        }
    }
}
