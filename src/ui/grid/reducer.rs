//! Routing of index-tagged actions.

use crate::ui::grid::intent::GridAction;
use crate::ui::grid::state::GridState;

/// Apply `action` to the child it is tagged with.
///
/// Every other child, and the layout, pass through untouched. An index past
/// the end of `children` leaves the state as it was.
pub fn update<C, A, F>(leaf_update: F, action: GridAction<A>, state: GridState<C>) -> GridState<C>
where
    C: Default,
    F: FnOnce(A, C) -> C,
{
    let GridAction { index, action } = action;
    let mut state = state;
    match state.children.get_mut(index) {
        Some(slot) => {
            let child = std::mem::take(slot);
            *slot = leaf_update(action, child);
        }
        None => {
            tracing::debug!(
                index,
                len = state.children.len(),
                "Grid: ignoring action for out-of-range cell"
            );
        }
    }
    state
}
