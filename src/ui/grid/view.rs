//! Composition of child views into a single grid node.

use crate::ui::grid::context::GridContext;
use crate::ui::grid::intent::GridAction;
use crate::ui::grid::state::GridState;
use crate::ui::mvi::Dispatcher;
use crate::ui::node::Node;

/// Render every child at its cell.
///
/// For each child the grid derives a [`GridContext`], maps it to the leaf's
/// own context with `translate`, and gives the leaf a dispatcher that tags
/// its actions with the child's index before forwarding them to `dispatch`.
/// Cell nodes appear in the result's children in index order.
pub fn view<C, A, X, T, V>(
    state: &GridState<C>,
    dispatch: &Dispatcher<GridAction<A>>,
    translate: T,
    leaf_view: V,
) -> Node
where
    A: 'static,
    T: Fn(&GridContext) -> X,
    V: Fn(&X, &Dispatcher<A>, &C) -> Node,
{
    let cells = state.children.iter().enumerate().map(|(index, child)| {
        let context = translate(&state.generate_context(index));
        let scoped = dispatch.map(move |action| GridAction::new(index, action));
        leaf_view(&context, &scoped, child).at(state.cell_position(index))
    });
    Node::new(state.grid_size()).with_children(cells)
}
