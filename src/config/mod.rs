mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, GridConfig, ThemeConfig, UiConfig, MAX_CELLS};
