use std::num::NonZeroU16;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Clone, Parser)]
#[command(name = "gridmvi", version, about = "A checkerboard of independent counters")]
pub struct Cli {
    /// Config file (default: ~/.config/gridmvi/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override number of grid columns
    #[arg(long, value_name = "N")]
    pub columns: Option<NonZeroU16>,

    /// Override number of counters
    #[arg(long, value_name = "N")]
    pub cells: Option<usize>,

    /// Override cell height in terminal rows
    #[arg(long, value_name = "ROWS")]
    pub cell_height: Option<u16>,

    /// Override grid width in terminal columns
    #[arg(long, value_name = "COLS")]
    pub width: Option<u16>,

    /// Print the board geometry as JSON and exit
    #[arg(long)]
    pub dump_layout: bool,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(columns) = self.columns {
            config.grid.columns = columns;
        }
        if let Some(cells) = self.cells {
            config.grid.cells = cells;
        }
        if let Some(cell_height) = self.cell_height {
            config.grid.cell_height = cell_height;
        }
        if let Some(width) = self.width {
            config.grid.width = width;
        }
    }
}
