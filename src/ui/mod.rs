pub mod app;
pub mod board;
pub mod checkerboard;
pub mod counter;
pub mod events;
pub mod geometry;
pub mod grid;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod node;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
