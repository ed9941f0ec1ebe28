//! Configuration model
//!
//! [`Config`] is the immutable snapshot read by every log call; [`RawConfig`]
//! is the serde mirror of the JSON config file, doubling as the programmatic
//! reconfiguration input. A reconfigure builds a fresh `Config` from defaults,
//! merges the raw settings into it and publishes the result with a single
//! pointer swap, so readers never observe a half-applied configuration.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

use super::level::LogLevel;
use super::timestamp::TimestampFormatter;

/// Reserved pseudo-category: a `levels` entry under this key sets the global
/// level instead of a per-category override.
pub const CATEGORY_ALL: &str = "[all]";

/// Conventional config file name, resolved against the working directory and
/// loaded at startup when present.
pub const DEFAULT_CONFIG_FILE: &str = "logconfig.json";

/// Minimum accepted watch interval; smaller values are clamped, not rejected.
pub const MIN_WATCH_INTERVAL: Duration = Duration::from_secs(10);

const DEFAULT_WATCH_INTERVAL: Duration = Duration::from_secs(60);

/// The pluggable write path. Receives one fully formatted line per log call.
pub type Sink = Arc<dyn Fn(&str) + Send + Sync>;

fn default_sink() -> Sink {
    Arc::new(|line| println!("{line}"))
}

/// Watcher implementation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchStrategy {
    /// Periodic mtime sampling on a background thread.
    Poll,
    /// OS file-change notification via `notify`.
    #[default]
    Notify,
}

impl WatchStrategy {
    /// Case-insensitive name lookup; `None` for unrecognized names.
    #[must_use]
    pub fn resolve(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "poll" => Some(WatchStrategy::Poll),
            "notify" => Some(WatchStrategy::Notify),
            _ => None,
        }
    }
}

/// Active configuration snapshot. Immutable once published.
#[derive(Clone)]
pub struct Config {
    pub global_level: LogLevel,
    /// Per-category overrides. Never contains [`CATEGORY_ALL`].
    pub category_levels: HashMap<String, LogLevel>,
    /// `None` disables timestamps entirely.
    pub timestamp: Option<TimestampFormatter>,
    pub watch: bool,
    pub watch_interval: Duration,
    pub watch_strategy: WatchStrategy,
    pub sink: Sink,
}

impl Config {
    /// Effective threshold for a category: the per-category override when one
    /// is configured, the global level otherwise.
    ///
    /// The default logger (empty category) always resolves to the global
    /// level.
    #[must_use]
    pub fn resolve(&self, category: &str) -> LogLevel {
        if category.is_empty() {
            return self.global_level;
        }
        self.category_levels
            .get(category)
            .copied()
            .unwrap_or(self.global_level)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global_level: LogLevel::Info,
            category_levels: HashMap::new(),
            timestamp: Some(TimestampFormatter::default()),
            watch: false,
            watch_interval: DEFAULT_WATCH_INTERVAL,
            watch_strategy: WatchStrategy::default(),
            sink: default_sink(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("global_level", &self.global_level)
            .field("category_levels", &self.category_levels)
            .field("timestamp", &self.timestamp)
            .field("watch", &self.watch)
            .field("watch_interval", &self.watch_interval)
            .field("watch_strategy", &self.watch_strategy)
            .finish_non_exhaustive()
    }
}

/// Raw configuration settings: the shape of the JSON config file.
///
/// Every field is independently optional and unknown fields are ignored, so a
/// partial document is always acceptable.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawConfig {
    pub level: Option<String>,
    pub levels: Option<HashMap<String, String>>,
    pub watch: Option<bool>,
    pub watch_interval: Option<u64>,
    pub watch_strategy: Option<String>,
    /// Tri-state: field absent keeps the default pattern, explicit `null`
    /// disables timestamps, a string installs that pattern.
    #[serde(deserialize_with = "some_or_null")]
    pub date_format: Option<Option<String>>,
    /// Programmatic sink override; not part of the file format.
    #[serde(skip)]
    pub sink: Option<Sink>,
}

impl fmt::Debug for RawConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawConfig")
            .field("level", &self.level)
            .field("levels", &self.levels)
            .field("watch", &self.watch)
            .field("watch_interval", &self.watch_interval)
            .field("watch_strategy", &self.watch_strategy)
            .field("date_format", &self.date_format)
            .field("sink", &self.sink.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Distinguishes `null` from an absent field while deserializing.
fn some_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Input accepted by [`configure`](crate::configure): either settings or a
/// path to a JSON config file.
pub enum ConfigInput {
    Settings(RawConfig),
    File(PathBuf),
}

impl From<RawConfig> for ConfigInput {
    fn from(raw: RawConfig) -> Self {
        ConfigInput::Settings(raw)
    }
}

impl From<&str> for ConfigInput {
    fn from(path: &str) -> Self {
        ConfigInput::File(PathBuf::from(path))
    }
}

impl From<String> for ConfigInput {
    fn from(path: String) -> Self {
        ConfigInput::File(PathBuf::from(path))
    }
}

impl From<&Path> for ConfigInput {
    fn from(path: &Path) -> Self {
        ConfigInput::File(path.to_path_buf())
    }
}

impl From<PathBuf> for ConfigInput {
    fn from(path: PathBuf) -> Self {
        ConfigInput::File(path)
    }
}
