//! Error types for configuration loading and watching

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Failures that can occur while loading, applying or watching configuration.
///
/// These never escape the public API: every boundary swallows them and emits a
/// one-line diagnostic on stderr, leaving the previously active configuration
/// in effect.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("could not load '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file content was not valid JSON for the expected shape
    #[error("error parsing JSON configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Timestamp pattern rejected by the formatter
    #[error("invalid date format pattern '{pattern}'")]
    DateFormat { pattern: String },

    /// Filesystem watch could not be established
    #[error("could not watch config file: {0}")]
    Watch(#[from] notify::Error),
}

impl ConfigError {
    /// Create a read error with the offending path
    pub fn read(path: impl Into<String>, source: std::io::Error) -> Self {
        ConfigError::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a date format error
    pub fn date_format(pattern: impl Into<String>) -> Self {
        ConfigError::DateFormat {
            pattern: pattern.into(),
        }
    }
}
