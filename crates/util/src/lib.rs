//! Configuration and filesystem helpers for menudock.

pub mod config;
pub mod path_processing;

pub use config::{CONFIG_PATH_ENV, ConfigError, DockConfig, default_config_path, parse_menu_item};
pub use path_processing::{app_file_path, expand_tilde};
