//! Counter leaf component.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - The count
//! - `intent.rs` - Increment, Decrement, Reset
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view.rs` - `Counter` component and its node

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CounterAction;
pub use reducer::CounterReducer;
pub use state::CounterState;
pub use view::{Counter, CounterContext};
