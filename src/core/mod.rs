//! Core configuration and logging types

pub mod config;
pub mod error;
pub mod level;
pub(crate) mod loader;
pub mod logger;
pub mod registry;
pub mod timestamp;

pub use config::{
    Config, ConfigInput, RawConfig, Sink, WatchStrategy, CATEGORY_ALL, DEFAULT_CONFIG_FILE,
    MIN_WATCH_INTERVAL,
};
pub use error::{ConfigError, Result};
pub use level::LogLevel;
pub use logger::Logger;
pub use registry::{
    configure, current_config, default_logger, dump_config, get_categories, get_category_level,
    get_level, get_logger, reset,
};
pub use timestamp::{TimestampFormatter, DEFAULT_DATE_FORMAT};
