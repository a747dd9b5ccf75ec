//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use gridmvi::config::Config;
use gridmvi::ui::app::App;
use gridmvi::ui::board;
use gridmvi::ui::counter::CounterState;
use gridmvi::ui::grid::GridState;
use std::num::NonZeroU16;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn cols(n: u16) -> NonZeroU16 {
    NonZeroU16::new(n).expect("non-zero column count")
}

/// Grid of `cells` counters holding 0, 1, 2, ...
pub fn counters(cells: usize, num_cols: u16, cell_height: u16, width: u16) -> GridState<CounterState> {
    GridState::new(
        (0..cells).map(|n| CounterState::new(n as i64)).collect(),
        cell_height,
        cols(num_cols),
        width,
    )
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- App helpers --------------------------------------------------------------

pub fn make_config(columns: u16, cells: usize, cell_height: u16, width: u16) -> Config {
    let mut config = Config::default();
    config.grid.columns = cols(columns);
    config.grid.cells = cells;
    config.grid.cell_height = cell_height;
    config.grid.width = width;
    config
}

/// App over the default 8×8 board, sized for an 80×30 terminal.
///
/// Body is rows 3..27; the 64×24 grid sits at x 8, y 3 with 8×3 cells.
pub fn make_app() -> App {
    make_app_with(&Config::default())
}

pub fn make_app_with(config: &Config) -> App {
    let board = board::build(config).expect("valid config");
    let mut app = App::new(board);
    app.on_resize(80, 30);
    app
}
