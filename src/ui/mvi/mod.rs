//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base traits for unidirectional data flow and
//! for composing components out of other components.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View ──→ Node
//!    ↑                                       │
//!    └──────────── Dispatcher ←──────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Component**: State, Intent and view bundled so a parent can own it
//! - **Dispatcher**: Target that views send intents to

mod component;
mod dispatch;
mod intent;
mod reducer;
mod state;

pub use component::Component;
pub use dispatch::Dispatcher;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
