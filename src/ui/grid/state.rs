//! State for the grid container and the geometry derived from it.

use std::num::NonZeroU16;

use crate::ui::geometry::{Offset, Size};
use crate::ui::grid::context::GridContext;
use crate::ui::mvi::UiState;

/// Parameters `Grid::init` builds a state from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub num_cols: NonZeroU16,
    /// Number of children.
    pub cells: usize,
    pub cell_height: u16,
    pub grid_width: u16,
}

/// Children of a grid plus the layout they are drawn with.
///
/// The number of children does not have to be a multiple of `num_cols`;
/// the last row may be partial.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState<C> {
    pub children: Vec<C>,
    pub cell_height: u16,
    pub num_cols: NonZeroU16,
    pub grid_width: u16,
}

impl<C> Default for GridState<C> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            cell_height: 0,
            num_cols: NonZeroU16::MIN,
            grid_width: 0,
        }
    }
}

impl<C: UiState> UiState for GridState<C> {}

impl<C> GridState<C> {
    pub fn new(children: Vec<C>, cell_height: u16, num_cols: NonZeroU16, grid_width: u16) -> Self {
        Self {
            children,
            cell_height,
            num_cols,
            grid_width,
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of full rows. A partial last row is not counted.
    pub fn full_rows(&self) -> usize {
        self.children.len() / self.cols()
    }

    /// Size of the whole grid.
    ///
    /// Height covers full rows only: with 10 children in 4 columns the grid
    /// is two rows tall and the last two cells hang below it.
    pub fn grid_size(&self) -> Size {
        let rows = u16::try_from(self.full_rows()).unwrap_or(u16::MAX);
        Size::new(self.grid_width, self.cell_height.saturating_mul(rows))
    }

    /// Size shared by every cell.
    pub fn cell_size(&self) -> Size {
        Size::new(self.grid_width / self.num_cols.get(), self.cell_height)
    }

    /// `(row, column)` of the cell at `index`.
    pub fn cell_coords(&self, index: usize) -> (usize, usize) {
        (index / self.cols(), index % self.cols())
    }

    /// Top-left corner of the cell at `index`, relative to the grid.
    pub fn cell_position(&self, index: usize) -> Offset {
        let (row, column) = self.cell_coords(index);
        let cell = self.cell_size();
        // column < num_cols, so it always fits in u16.
        let column = column as u16;
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        Offset::new(
            column.saturating_mul(cell.width),
            row.saturating_mul(cell.height),
        )
    }

    pub fn generate_context(&self, index: usize) -> GridContext {
        let (row, column) = self.cell_coords(index);
        GridContext {
            viewport: self.cell_size(),
            row,
            column,
        }
    }

    fn cols(&self) -> usize {
        usize::from(self.num_cols.get())
    }
}
