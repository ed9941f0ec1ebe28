//! Process-wide configuration store and logger registry
//!
//! The active [`Config`] lives behind an `ArcSwap`: log calls load the
//! snapshot wait-free, a reconfigure builds the replacement off to the side
//! and publishes it with a single pointer swap. Reconfigures themselves are
//! serialized by a mutex that also owns the watch state, so tearing down the
//! old watcher and installing the new one can never interleave.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use super::config::{
    Config, ConfigInput, RawConfig, WatchStrategy, CATEGORY_ALL, DEFAULT_CONFIG_FILE,
    MIN_WATCH_INTERVAL,
};
use super::level::LogLevel;
use super::loader;
use super::logger::Logger;
use super::timestamp::TimestampFormatter;
use crate::watch::{self, WatchHandle};

static RUNTIME: Lazy<Runtime> = Lazy::new(Runtime::bootstrap);

/// Watch bookkeeping, guarded by the reconfigure mutex.
#[derive(Default)]
struct WatchState {
    /// Path of the most recently loaded config file; watch setup targets it.
    config_file: Option<PathBuf>,
    /// Active watch, if any. Torn down at the start of every reconfigure.
    watcher: Option<WatchHandle>,
}

pub(crate) struct Runtime {
    config: ArcSwap<Config>,
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
    default_logger: Arc<Logger>,
    watch_state: Mutex<WatchState>,
}

impl Runtime {
    fn bootstrap() -> Self {
        let runtime = Runtime {
            config: ArcSwap::from_pointee(Config::default()),
            loggers: Mutex::new(HashMap::new()),
            default_logger: Arc::new(Logger::new(String::new(), LogLevel::Info)),
            watch_state: Mutex::new(WatchState::default()),
        };

        // A conventional config file in the working directory is applied
        // before any logger is handed out.
        let default_file = Path::new(DEFAULT_CONFIG_FILE);
        if default_file.is_file() {
            loader::load_from_file(&runtime, default_file);
        }

        runtime
    }

    /// Build a fresh snapshot from defaults, merge `raw` into it and publish
    /// it. `new_path` records the config file a file-based load came from.
    pub(crate) fn apply(&self, raw: RawConfig, new_path: Option<PathBuf>) {
        let mut state = self.watch_state.lock();

        // Tear down the previous watch first so stale watchers never leak
        // across reconfigures.
        state.watcher = None;
        if let Some(path) = new_path {
            state.config_file = Some(path);
        }

        let mut config = Config::default();

        if let Some(name) = &raw.level {
            config.global_level = LogLevel::resolve(name);
        }

        if let Some(seconds) = raw.watch_interval {
            let interval = Duration::from_secs(seconds);
            if interval < MIN_WATCH_INTERVAL {
                eprintln!("[LOGGER WARNING] watchInterval less than 10 seconds, setting to 10");
                config.watch_interval = MIN_WATCH_INTERVAL;
            } else {
                config.watch_interval = interval;
            }
        }

        if let Some(levels) = &raw.levels {
            for (category, name) in levels {
                let level = LogLevel::resolve(name);
                if category == CATEGORY_ALL {
                    config.global_level = level;
                } else {
                    config.category_levels.insert(category.clone(), level);
                }
            }
        }

        match &raw.date_format {
            // field absent: keep the default pattern
            None => {}
            // explicit null: disable timestamps entirely
            Some(None) => config.timestamp = None,
            Some(Some(pattern)) => match TimestampFormatter::new(pattern) {
                Ok(formatter) => config.timestamp = Some(formatter),
                Err(e) => eprintln!("[LOGGER ERROR] {e}, keeping default pattern"),
            },
        }

        if let Some(watch) = raw.watch {
            config.watch = watch;
        }

        if let Some(name) = &raw.watch_strategy {
            match WatchStrategy::resolve(name) {
                Some(strategy) => config.watch_strategy = strategy,
                None => eprintln!(
                    "[LOGGER WARNING] unknown watchStrategy '{name}', using {:?}",
                    config.watch_strategy
                ),
            }
        }

        if let Some(sink) = raw.sink {
            config.sink = sink;
        }

        let watch = config.watch;
        let strategy = config.watch_strategy;
        let interval = config.watch_interval;

        self.config.store(Arc::new(config));
        self.refresh_loggers();

        if watch {
            if let Some(path) = state.config_file.clone() {
                let reload: watch::ReloadFn =
                    Arc::new(|changed: &Path| loader::load_from_file(&RUNTIME, changed));
                match watch::spawn(strategy, path, interval, reload) {
                    Ok(handle) => state.watcher = Some(handle),
                    Err(e) => eprintln!("[LOGGER ERROR] {e}"),
                }
            }
        }
    }

    fn reset(&self) {
        let mut state = self.watch_state.lock();
        state.watcher = None;
        self.config.store(Arc::new(Config::default()));
        self.refresh_loggers();
    }

    /// Recompute every cached logger's threshold from the active snapshot.
    /// No logger is left stale after a reconfigure.
    fn refresh_loggers(&self) {
        let config = self.config.load();
        self.default_logger.set_level(config.global_level);
        let loggers = self.loggers.lock();
        for (category, logger) in loggers.iter() {
            logger.set_level(config.resolve(category));
        }
    }

    fn logger(&self, category: &str) -> Arc<Logger> {
        if category.is_empty() {
            return Arc::clone(&self.default_logger);
        }

        let mut loggers = self.loggers.lock();
        if let Some(logger) = loggers.get(category) {
            return Arc::clone(logger);
        }

        let level = self.config.load().resolve(category);
        let logger = Arc::new(Logger::new(category.to_string(), level));
        loggers.insert(category.to_string(), Arc::clone(&logger));
        logger
    }
}

/// Active configuration snapshot, as read by the write path.
pub(crate) fn current() -> Arc<Config> {
    RUNTIME.config.load_full()
}

/// Apply new configuration settings, or load them from a JSON file.
///
/// Accepts a [`RawConfig`] or anything path-like. Failures never propagate:
/// they are reported on stderr and the previously active configuration stays
/// in effect.
pub fn configure(input: impl Into<ConfigInput>) {
    match input.into() {
        ConfigInput::Settings(raw) => RUNTIME.apply(raw, None),
        ConfigInput::File(path) => loader::load_from_file(&RUNTIME, &path),
    }
}

/// Restore built-in defaults and cancel any active config-file watch.
pub fn reset() {
    RUNTIME.reset();
}

/// The logger for `category`; the empty string returns the shared default
/// logger. Repeated calls with the same category return the same instance.
pub fn get_logger(category: &str) -> Arc<Logger> {
    RUNTIME.logger(category)
}

/// The shared default logger.
pub fn default_logger() -> Arc<Logger> {
    RUNTIME.logger("")
}

/// Name of the global level.
pub fn get_level() -> &'static str {
    RUNTIME.config.load().global_level.as_str()
}

/// Name of the effective level for `category`, falling back to the global
/// level when no override is configured.
pub fn get_category_level(category: &str) -> &'static str {
    RUNTIME.config.load().resolve(category).as_str()
}

/// The configured per-category overrides.
pub fn get_categories() -> HashMap<String, LogLevel> {
    RUNTIME.config.load().category_levels.clone()
}

/// The active configuration snapshot.
pub fn current_config() -> Arc<Config> {
    current()
}

/// Debug-print the active configuration to stdout.
pub fn dump_config() {
    println!("{:#?}", current());
}
