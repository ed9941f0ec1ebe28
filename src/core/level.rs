//! Severity scale and level-name resolution

use std::fmt;

/// Names of the severity scale, in threshold order.
///
/// `Silent` sits one step past the end of this table and has no name of its own.
const LEVEL_NAMES: [&str; 8] = [
    "all", "trace", "debug", "info", "warn", "error", "fatal", "off",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    /// Minimum sentinel: a threshold that matches every severity.
    All = 0,
    Trace = 1,
    Debug = 2,
    #[default]
    Info = 3,
    Warn = 4,
    Error = 5,
    Fatal = 6,
    /// Maximum named sentinel: a threshold that matches nothing.
    Off = 7,
    /// Fail-safe resolution of an unrecognized level name. Stricter than
    /// `Off`, so a typo in a config file silences logging instead of
    /// flooding it.
    Silent = 8,
}

impl LogLevel {
    /// Resolve a level name, case-insensitively.
    ///
    /// Unknown or empty input resolves to [`LogLevel::Silent`] rather than
    /// failing.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        let lower = name.to_lowercase();
        match LEVEL_NAMES.iter().position(|n| *n == lower) {
            Some(ix) => Self::from_index(ix as u8),
            None => LogLevel::Silent,
        }
    }

    /// Decode a raw threshold index. Out-of-range values decode to `Silent`.
    #[must_use]
    pub fn from_index(ix: u8) -> Self {
        match ix {
            0 => LogLevel::All,
            1 => LogLevel::Trace,
            2 => LogLevel::Debug,
            3 => LogLevel::Info,
            4 => LogLevel::Warn,
            5 => LogLevel::Error,
            6 => LogLevel::Fatal,
            7 => LogLevel::Off,
            _ => LogLevel::Silent,
        }
    }

    /// Lowercase name of this level. `Silent` is outside the named scale and
    /// renders as `"off"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        LEVEL_NAMES.get(self as usize).copied().unwrap_or("off")
    }

    /// Bracketed uppercase tag used in formatted log lines, e.g. `[INFO]`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::All => "[ALL]",
            LogLevel::Trace => "[TRACE]",
            LogLevel::Debug => "[DEBUG]",
            LogLevel::Info => "[INFO]",
            LogLevel::Warn => "[WARN]",
            LogLevel::Error => "[ERROR]",
            LogLevel::Fatal => "[FATAL]",
            LogLevel::Off | LogLevel::Silent => "[OFF]",
        }
    }

    /// True for severities a message can be written at.
    ///
    /// `All`, `Off` and `Silent` are thresholds, not message severities.
    #[must_use]
    pub fn is_writable(self) -> bool {
        matches!(
            self,
            LogLevel::Trace
                | LogLevel::Debug
                | LogLevel::Info
                | LogLevel::Warn
                | LogLevel::Error
                | LogLevel::Fatal
        )
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
