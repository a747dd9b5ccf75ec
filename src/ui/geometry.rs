//! Sizes and offsets in terminal cells.

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Offset of a node from its parent's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Offset {
    pub left: u16,
    pub top: u16,
}

impl Offset {
    pub const fn new(left: u16, top: u16) -> Self {
        Self { left, top }
    }
}
