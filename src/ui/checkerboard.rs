//! Checkerboard coloring of grid cells.

use ratatui::style::Color;

use crate::ui::grid::GridContext;

/// True when both parities match: `(0, 0)` and `(1, 1)` are black.
pub fn is_black(row: usize, column: usize) -> bool {
    (row % 2 == 0) == (column % 2 == 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkerboard {
    pub light: Color,
    pub dark: Color,
}

impl Checkerboard {
    pub fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    /// `(foreground, background)` for the cell. Black cells draw light on
    /// dark, the others dark on light.
    pub fn colors(&self, context: &GridContext) -> (Color, Color) {
        if is_black(context.row, context.column) {
            (self.light, self.dark)
        } else {
            (self.dark, self.light)
        }
    }
}
