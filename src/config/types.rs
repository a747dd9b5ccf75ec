use std::num::NonZeroU16;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Largest accepted number of counters.
pub const MAX_CELLS: usize = 1 << 16;

/// Layout of the counter grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of columns. Zero is rejected while parsing.
    #[serde(default = "default_columns")]
    pub columns: NonZeroU16,
    /// Number of counters.
    #[serde(default = "default_cells")]
    pub cells: usize,
    /// Height of one cell in terminal rows.
    #[serde(default = "default_cell_height")]
    pub cell_height: u16,
    /// Width of the whole grid in terminal columns.
    #[serde(default = "default_width")]
    pub width: u16,
}

/// Checkerboard colors. Accepts anything ratatui parses as a color:
/// names ("white", "dark gray"), "#rrggbb", or an index ("42").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_light")]
    pub light: String,
    #[serde(default = "default_dark")]
    pub dark: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between redraws when no input arrives (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

const DEFAULT_COLUMNS: NonZeroU16 = match NonZeroU16::new(8) {
    Some(columns) => columns,
    None => unreachable!(),
};

fn default_columns() -> NonZeroU16 {
    DEFAULT_COLUMNS
}

fn default_cells() -> usize {
    64
}

fn default_cell_height() -> u16 {
    3
}

fn default_width() -> u16 {
    64
}

fn default_light() -> String {
    "#f0d9b5".to_string()
}

fn default_dark() -> String {
    "#b58863".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            cells: default_cells(),
            cell_height: default_cell_height(),
            width: default_width(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            light: default_light(),
            dark: default_dark(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
