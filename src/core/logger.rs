//! Per-category logger handles

use std::fmt;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicU8, Ordering};

use super::level::LogLevel;
use super::registry;

/// A named logging channel.
///
/// Loggers are cheap projections of the process-wide configuration: each one
/// caches its resolved threshold in an atomic, refreshed by the registry on
/// every reconfigure, and consults the active snapshot only when a message is
/// actually written. Obtain instances through
/// [`get_logger`](crate::get_logger); one logger exists per distinct category
/// string.
pub struct Logger {
    category: String,
    resolved: AtomicU8,
}

impl Logger {
    pub(crate) fn new(category: String, level: LogLevel) -> Self {
        Self {
            category,
            resolved: AtomicU8::new(level as u8),
        }
    }

    /// The category string; empty for the shared default logger.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Current resolved threshold.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_index(self.resolved.load(Ordering::Relaxed))
    }

    /// Name of the current resolved threshold.
    #[must_use]
    pub fn get_level(&self) -> &'static str {
        self.level().as_str()
    }

    pub(crate) fn set_level(&self, level: LogLevel) {
        self.resolved.store(level as u8, Ordering::Relaxed);
    }

    /// Whether a message at `level` would currently be written.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.level() <= level
    }

    #[must_use]
    pub fn is_trace_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Trace)
    }

    #[must_use]
    pub fn is_debug_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Debug)
    }

    #[must_use]
    pub fn is_info_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Info)
    }

    #[must_use]
    pub fn is_warn_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Warn)
    }

    #[must_use]
    pub fn is_error_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Error)
    }

    #[must_use]
    pub fn is_fatal_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Fatal)
    }

    /// Write a message at `level`.
    ///
    /// A no-op when `level` is a sentinel or currently disabled. Otherwise the
    /// line is formatted as `<timestamp>: [LEVEL] <category> - <message>` and
    /// handed to the current sink synchronously and inline; nothing is
    /// buffered or deferred.
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        if !level.is_writable() || !self.is_enabled(level) {
            return;
        }

        let config = registry::current();

        let mut line = String::new();
        if let Some(formatter) = &config.timestamp {
            line.push_str(&formatter.now());
            line.push_str(": ");
        }
        line.push_str(level.label());
        if !self.category.is_empty() {
            line.push(' ');
            line.push_str(&self.category);
        }
        line.push_str(" - ");
        let _ = write!(line, "{message}");

        (config.sink)(&line);
    }

    #[inline]
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl fmt::Display) {
        self.log(LogLevel::Fatal, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("category", &self.category)
            .field("level", &self.level())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_boundaries_at_info() {
        let logger = Logger::new("t".to_string(), LogLevel::Info);
        assert!(!logger.is_trace_enabled());
        assert!(!logger.is_debug_enabled());
        assert!(logger.is_info_enabled());
        assert!(logger.is_warn_enabled());
        assert!(logger.is_error_enabled());
        assert!(logger.is_fatal_enabled());
    }

    #[test]
    fn test_all_enables_everything_off_nothing() {
        let logger = Logger::new("t".to_string(), LogLevel::All);
        assert!(logger.is_trace_enabled());
        assert!(logger.is_fatal_enabled());

        logger.set_level(LogLevel::Off);
        assert!(!logger.is_fatal_enabled());

        logger.set_level(LogLevel::Silent);
        assert!(!logger.is_fatal_enabled());
    }

    #[test]
    fn test_get_level_tracks_refresh() {
        let logger = Logger::new("t".to_string(), LogLevel::Debug);
        assert_eq!(logger.get_level(), "debug");
        logger.set_level(LogLevel::Error);
        assert_eq!(logger.get_level(), "error");
    }
}
