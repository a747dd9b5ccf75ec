//! The demo application: a checkerboard of counters.

use serde::Serialize;

use crate::config::{Config, ConfigError, GridConfig};
use crate::ui::checkerboard::{is_black, Checkerboard};
use crate::ui::counter::{Counter, CounterAction, CounterContext, CounterState};
use crate::ui::geometry::Size;
use crate::ui::grid::{Grid, GridAction, GridLayout, GridState};

pub type Board = Grid<Counter>;
pub type BoardState = GridState<CounterState>;
pub type BoardAction = GridAction<CounterAction>;

impl From<&GridConfig> for GridLayout {
    fn from(config: &GridConfig) -> Self {
        GridLayout {
            num_cols: config.columns,
            cells: config.cells,
            cell_height: config.cell_height,
            grid_width: config.width,
        }
    }
}

/// Build the board described by `config`.
pub fn build(config: &Config) -> Result<Board, ConfigError> {
    let (light, dark) = config.theme.colors()?;
    let palette = Checkerboard::new(light, dark);
    Ok(Grid::new(
        Counter,
        GridLayout::from(&config.grid),
        move |context| {
            let (foreground, background) = palette.colors(context);
            CounterContext {
                viewport: context.viewport,
                foreground,
                background,
            }
        },
    ))
}

/// Sum of all counters.
pub fn total(state: &BoardState) -> i64 {
    state
        .children
        .iter()
        .fold(0i64, |sum, counter| sum.saturating_add(counter.count))
}

/// Geometry of a board, for `--dump-layout`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    pub grid: Size,
    pub cell: Size,
    pub cells: Vec<CellReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellReport {
    pub index: usize,
    pub row: usize,
    pub column: usize,
    pub left: u16,
    pub top: u16,
    pub dark: bool,
}

impl LayoutReport {
    pub fn new<C>(state: &GridState<C>) -> Self {
        let cells = (0..state.len())
            .map(|index| {
                let context = state.generate_context(index);
                let position = state.cell_position(index);
                CellReport {
                    index,
                    row: context.row,
                    column: context.column,
                    left: position.left,
                    top: position.top,
                    dark: is_black(context.row, context.column),
                }
            })
            .collect();
        Self {
            grid: state.grid_size(),
            cell: state.cell_size(),
            cells,
        }
    }
}
