use ratatui::style::{Color, Modifier, Style};

use crate::ui::counter::intent::CounterAction;
use crate::ui::counter::reducer::CounterReducer;
use crate::ui::counter::state::CounterState;
use crate::ui::geometry::{Offset, Size};
use crate::ui::mvi::{Component, Dispatcher, Reducer};
use crate::ui::node::Node;

const DECREMENT_LABEL: &str = "[-]";
const INCREMENT_LABEL: &str = "[+]";

/// What a counter needs from its parent to draw itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterContext {
    pub viewport: Size,
    pub foreground: Color,
    pub background: Color,
}

/// A number with buttons to change it.
///
/// Layout inside the viewport: the count centered on the middle row, `[-]`
/// bottom-left and `[+]` bottom-right. Keys `+`/`=` increment, `-`
/// decrements, `0` resets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Counter;

impl Component for Counter {
    type State = CounterState;
    type Action = CounterAction;
    type Context = CounterContext;

    fn init(&self) -> Self::State {
        CounterState::default()
    }

    fn update(&self, action: Self::Action, state: Self::State) -> Self::State {
        CounterReducer::reduce(state, action)
    }

    fn view(
        &self,
        context: &Self::Context,
        dispatch: &Dispatcher<Self::Action>,
        state: &Self::State,
    ) -> Node {
        let viewport = context.viewport;
        let style = Style::default()
            .fg(context.foreground)
            .bg(context.background);
        let button_row = viewport.height.saturating_sub(1);
        let count_row = button_row / 2;
        let button_width = DECREMENT_LABEL.len() as u16;

        let count = Node::new(Size::new(viewport.width, 1))
            .at(Offset::new(0, count_row))
            .line(state.count.to_string());
        let decrement = Node::new(Size::new(button_width, 1))
            .at(Offset::new(0, button_row))
            .styled(style.add_modifier(Modifier::BOLD))
            .line(DECREMENT_LABEL)
            .on_click(emit(dispatch, CounterAction::Decrement));
        let increment = Node::new(Size::new(button_width, 1))
            .at(Offset::new(
                viewport.width.saturating_sub(button_width),
                button_row,
            ))
            .styled(style.add_modifier(Modifier::BOLD))
            .line(INCREMENT_LABEL)
            .on_click(emit(dispatch, CounterAction::Increment));

        Node::new(viewport)
            .styled(style)
            .on_key('+', emit(dispatch, CounterAction::Increment))
            .on_key('=', emit(dispatch, CounterAction::Increment))
            .on_key('-', emit(dispatch, CounterAction::Decrement))
            .on_key('0', emit(dispatch, CounterAction::Reset))
            .child(count)
            .child(decrement)
            .child(increment)
    }
}

fn emit(dispatch: &Dispatcher<CounterAction>, action: CounterAction) -> impl Fn() + Send + Sync + 'static {
    let dispatch = dispatch.clone();
    move || dispatch.dispatch(action)
}
