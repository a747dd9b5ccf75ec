mod common;

use common::temp_config;
use gridmvi::config::{Config, ConfigError, MAX_CELLS};
use ratatui::style::Color;
use std::path::Path;
use std::time::Duration;

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.grid.columns.get(), 8);
    assert_eq!(config.grid.cells, 64);
    assert_eq!(config.grid.cell_height, 3);
    assert_eq!(config.grid.width, 64);
    assert_eq!(config.theme.light, "#f0d9b5");
    assert_eq!(config.theme.dark, "#b58863");
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(250));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("gridmvi/config.toml"));
}

#[test]
fn test_load_full_file() {
    let (_dir, path) = temp_config(
        r##"
[grid]
columns = 4
cells = 10
cell_height = 5
width = 48

[theme]
light = "white"
dark = "#202020"

[ui]
tick_rate_ms = 100
"##,
    );
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.grid.columns.get(), 4);
    assert_eq!(config.grid.cells, 10);
    assert_eq!(config.grid.cell_height, 5);
    assert_eq!(config.grid.width, 48);
    assert_eq!(
        config.theme.colors().expect("colors"),
        (Color::White, Color::Rgb(0x20, 0x20, 0x20))
    );
    assert_eq!(config.ui.tick_rate_ms, 100);
}

#[test]
fn test_partial_file_uses_defaults() {
    let (_dir, path) = temp_config("[grid]\ncells = 3\n");
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.grid.cells, 3);
    assert_eq!(config.grid.columns.get(), 8);
    assert_eq!(config.theme, Config::default().theme);
}

#[test]
fn test_empty_file_is_default() {
    let (_dir, path) = temp_config("");
    assert_eq!(Config::load_from(&path).expect("valid config"), Config::default());
}

#[test]
fn test_zero_columns_rejected() {
    let (_dir, path) = temp_config("[grid]\ncolumns = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "got {err:?}");
}

#[test]
fn test_bad_color_rejected() {
    let (_dir, path) = temp_config("[theme]\nlight = \"chartreuse-ish\"\n");
    let err = Config::load_from(&path).unwrap_err();
    match err {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("theme.light"), "{message}");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_zero_tick_rate_rejected() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_cell_count_beyond_maximum_rejected() {
    let (_dir, path) = temp_config(&format!("[grid]\ncells = {}\n", MAX_CELLS + 1));
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("grid.cells"), "{err}");

    let (_dir, path) = temp_config("[grid]\ncells = 18446744073709551615\n");
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_rows_past_coordinate_range_rejected() {
    // 30000 rows of height 3 end past row 65535.
    let (_dir, path) = temp_config("[grid]\ncolumns = 1\ncells = 30000\ncell_height = 3\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));

    // A partial last row still needs room.
    let mut config = Config::default();
    config.grid.columns = common::cols(2);
    config.grid.cell_height = 2;
    // 32768 rows of height 2 end one past the range.
    config.grid.cells = 2 * 32767 + 1;
    assert!(config.validate().is_err());
    config.grid.cells -= 1;
    assert!(config.validate().is_ok());
}

#[test]
fn test_largest_grid_builds() {
    let mut config = Config::default();
    config.grid.columns = common::cols(256);
    config.grid.cells = MAX_CELLS;
    config.grid.cell_height = 1;
    assert!(config.validate().is_ok());
    let board = gridmvi::ui::board::build(&config).expect("valid config");
    let state = gridmvi::ui::mvi::Component::init(&board);
    assert_eq!(state.len(), MAX_CELLS);
    assert_eq!(state.cell_position(MAX_CELLS - 1).top, 255);
}

#[test]
fn test_missing_file_is_read_error() {
    let err = Config::load_from(Path::new("/nonexistent/gridmvi/config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let (_dir, path) = temp_config("[grid\ncolumns = 2");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = Config::default();
    let text = toml::to_string(&config).expect("serializable");
    let parsed: Config = toml::from_str(&text).expect("parsable");
    assert_eq!(parsed, config);
}
