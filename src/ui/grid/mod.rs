//! Generic grid container.
//!
//! A [`Grid`] owns the states of a homogeneous set of child components laid
//! out in rows and columns. It routes index-tagged actions to the right
//! child and hands each child a context derived from the cell it occupies,
//! without knowing anything else about the child type.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Children plus layout parameters, geometry derivation
//! - `intent.rs` - `GridAction`, a child action tagged with its index
//! - `context.rs` - Per-cell context derived during rendering
//! - `reducer.rs` - Routing of actions by index (pure, no side effects)
//! - `view.rs` - Composition of child views into one positioned node
//! - `component.rs` - `Grid`, tying the above to a leaf component

mod component;
mod context;
mod intent;
mod reducer;
mod state;
mod view;

pub use component::Grid;
pub use context::GridContext;
pub use intent::GridAction;
pub use reducer::update;
pub use state::{GridLayout, GridState};
pub use view::view;
