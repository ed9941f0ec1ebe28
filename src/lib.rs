//! # hotlog
//!
//! Category-based, level-filtered logging with hot-reloadable file
//! configuration.
//!
//! ## Features
//!
//! - **Named loggers**: one cached logger per category, sharing a
//!   process-wide configuration
//! - **Level precedence**: per-category overrides fall back to a global level
//! - **Hot reload**: the JSON config file is re-read on a timer or via OS
//!   file notification, without restarting the process
//! - **Fail-safe**: configuration problems never crash the host and never
//!   propagate into log calls
//!
//! ## Quick start
//!
//! ```
//! use hotlog::{configure, get_logger, info, RawConfig};
//!
//! configure(RawConfig {
//!     level: Some("debug".to_string()),
//!     ..Default::default()
//! });
//!
//! let log = get_logger("example");
//! assert!(log.is_debug_enabled());
//! log.debug("a debug message");
//! info!(log, "listening on port {}", 8080);
//! ```
//!
//! Configuration can also come from a JSON file, re-read live when `watch`
//! is enabled:
//!
//! ```json
//! { "level": "info",
//!   "levels": { "db": "debug", "[all]": "warn" },
//!   "watch": true,
//!   "watchInterval": 60 }
//! ```

pub mod core;
pub mod macros;
pub(crate) mod watch;

pub mod prelude {
    pub use crate::core::config::{ConfigInput, RawConfig, Sink, WatchStrategy};
    pub use crate::core::level::LogLevel;
    pub use crate::core::logger::Logger;
    pub use crate::core::registry::{
        configure, default_logger, get_categories, get_category_level, get_level, get_logger,
        reset,
    };
}

pub use crate::core::config::{
    Config, ConfigInput, RawConfig, Sink, WatchStrategy, CATEGORY_ALL, DEFAULT_CONFIG_FILE,
    MIN_WATCH_INTERVAL,
};
pub use crate::core::error::{ConfigError, Result};
pub use crate::core::level::LogLevel;
pub use crate::core::logger::Logger;
pub use crate::core::registry::{
    configure, current_config, default_logger, dump_config, get_categories, get_category_level,
    get_level, get_logger, reset,
};
pub use crate::core::timestamp::{TimestampFormatter, DEFAULT_DATE_FORMAT};
