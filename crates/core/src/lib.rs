//! Hawaii Climate Core Library
//!
//! Shared pieces of the climate API:
//! - Configuration loading (XDG-compliant)
//! - File system checks
//! - Dataset constants

mod config;
mod dataset;
pub mod fs;

pub use config::{find_config_file, load_config, ConfigSource};
pub use dataset::DatasetConfig;
pub use fs::is_file;

/// Application name used for XDG paths
pub const APP_NAME: &str = "hawaii-climate";

/// Default API port
pub const DEFAULT_API_PORT: u16 = 5000;

/// Default location of the pre-loaded SQLite dataset
pub const DEFAULT_DATABASE_PATH: &str = "./Resources/hawaii.sqlite";
