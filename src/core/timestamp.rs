//! Timestamp formatting for log lines
//!
//! Wraps a strftime pattern that is validated when configuration is applied,
//! so the write path can format infallibly.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

use super::error::{ConfigError, Result};

/// Default timestamp pattern, e.g. `2025-01-08 10:30:45+0900`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%z";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFormatter {
    pattern: String,
}

impl TimestampFormatter {
    /// Build a formatter from a strftime pattern.
    ///
    /// The pattern is parsed up front; an unrecognized specifier is rejected
    /// here instead of failing on every log call.
    pub fn new(pattern: &str) -> Result<Self> {
        let invalid = StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error));
        if invalid {
            return Err(ConfigError::date_format(pattern));
        }
        Ok(Self {
            pattern: pattern.to_string(),
        })
    }

    /// The strftime pattern this formatter was built from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Format the current local time.
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }

    /// Format an arbitrary local time.
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        datetime.format(&self.pattern).to_string()
    }
}

impl Default for TimestampFormatter {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern_is_valid() {
        let formatter = TimestampFormatter::new(DEFAULT_DATE_FORMAT).unwrap();
        assert_eq!(formatter.pattern(), DEFAULT_DATE_FORMAT);
        assert_eq!(TimestampFormatter::default(), formatter);
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = TimestampFormatter::new("%Q").unwrap_err();
        assert!(matches!(err, ConfigError::DateFormat { .. }));
    }

    #[test]
    fn test_format_shape() {
        let formatter = TimestampFormatter::new("%Y-%m-%d").unwrap();
        let stamp = formatter.now();
        assert_eq!(stamp.len(), 10);
        assert_eq!(stamp.matches('-').count(), 2);
    }

    #[test]
    fn test_literal_pattern() {
        let formatter = TimestampFormatter::new("ts").unwrap();
        assert_eq!(formatter.now(), "ts");
    }
}
