use std::sync::Arc;

use crate::ui::grid::context::GridContext;
use crate::ui::grid::intent::GridAction;
use crate::ui::grid::reducer;
use crate::ui::grid::state::{GridLayout, GridState};
use crate::ui::grid::view;
use crate::ui::mvi::{Component, Dispatcher};
use crate::ui::node::Node;

type Translate<X> = Arc<dyn Fn(&GridContext) -> X + Send + Sync>;

/// Grid of `L` components.
///
/// `translate` turns the context of a cell into the leaf's own context; it
/// is the only place the composing application adds leaf-specific data
/// (colors, labels) to what the grid knows.
pub struct Grid<L: Component> {
    leaf: L,
    layout: GridLayout,
    translate: Translate<L::Context>,
}

impl<L: Component> Grid<L> {
    pub fn new<T>(leaf: L, layout: GridLayout, translate: T) -> Self
    where
        T: Fn(&GridContext) -> L::Context + Send + Sync + 'static,
    {
        Self {
            leaf,
            layout,
            translate: Arc::new(translate),
        }
    }

    pub fn leaf(&self) -> &L {
        &self.leaf
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }
}

impl<L: Component> Component for Grid<L> {
    type State = GridState<L::State>;
    type Action = GridAction<L::Action>;
    /// A grid takes its geometry from its own state.
    type Context = ();

    fn init(&self) -> Self::State {
        let children = (0..self.layout.cells).map(|_| self.leaf.init()).collect();
        GridState::new(
            children,
            self.layout.cell_height,
            self.layout.num_cols,
            self.layout.grid_width,
        )
    }

    fn update(&self, action: Self::Action, state: Self::State) -> Self::State {
        reducer::update(
            |action, child| self.leaf.update(action, child),
            action,
            state,
        )
    }

    fn view(
        &self,
        _context: &Self::Context,
        dispatch: &Dispatcher<Self::Action>,
        state: &Self::State,
    ) -> Node {
        view::view(
            state,
            dispatch,
            |context| (self.translate)(context),
            |context, dispatch, child| self.leaf.view(context, dispatch, child),
        )
    }
}
