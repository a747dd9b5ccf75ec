use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;
use thiserror::Error;

use crate::config::types::{Config, GridConfig, ThemeConfig, MAX_CELLS};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/gridmvi/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("gridmvi").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise behaves like [`Config::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads, parses and validates the config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Both theme colors parse
    /// - The tick rate is non-zero
    /// - `cells` is at most [`MAX_CELLS`] and every row of cells starts
    ///   inside the `u16` coordinate range
    ///
    /// A zero column count never gets this far; it fails to deserialize.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.theme.colors()?;

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be greater than zero".to_string(),
            });
        }

        self.grid.check_extent()?;

        if self.grid.width < self.grid.columns.get() {
            tracing::warn!(
                width = self.grid.width,
                columns = self.grid.columns.get(),
                "Grid narrower than its column count; cells will have zero width"
            );
        }

        Ok(())
    }
}

impl GridConfig {
    fn check_extent(&self) -> Result<(), ConfigError> {
        if self.cells > MAX_CELLS {
            return Err(ConfigError::ValidationError {
                message: format!("grid.cells: {} exceeds the maximum of {MAX_CELLS}", self.cells),
            });
        }

        let columns = usize::from(self.columns.get());
        let rows = self.cells.div_ceil(columns);
        let height = rows.saturating_mul(usize::from(self.cell_height));
        if height > usize::from(u16::MAX) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "grid: {} cells in {columns} columns of height {} need {height} rows, more than {}",
                    self.cells,
                    self.cell_height,
                    u16::MAX
                ),
            });
        }

        Ok(())
    }
}

impl ThemeConfig {
    /// Parsed `(light, dark)` colors.
    pub fn colors(&self) -> Result<(Color, Color), ConfigError> {
        Ok((parse_color("light", &self.light)?, parse_color("dark", &self.dark)?))
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value).map_err(|_| ConfigError::ValidationError {
        message: format!("theme.{field}: '{value}' is not a color"),
    })
}
