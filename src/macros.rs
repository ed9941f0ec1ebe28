//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! Invoking a level macro with a logger and no message at all is a silent
//! no-op rather than an error. That keeps an accidental `info!(log)` from
//! emitting an empty line, while a genuine empty message can still be logged
//! with `info!(log, "")`.
//!
//! # Examples
//!
//! ```
//! use hotlog::info;
//!
//! let log = hotlog::get_logger("server");
//!
//! // Basic logging
//! info!(log, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(log, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use hotlog::prelude::*;
/// # let log = hotlog::get_logger("demo");
/// use hotlog::log;
/// log!(log, LogLevel::Info, "Simple message");
/// log!(log, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(,)?) => {{
        let _ = &$logger;
        let _ = $level;
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # let log = hotlog::get_logger("demo");
/// use hotlog::trace;
/// trace!(log, "Entering function: calculate()");
/// trace!(log, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr $(,)?) => {{
        let _ = &$logger;
    }};
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # let log = hotlog::get_logger("demo");
/// use hotlog::debug;
/// debug!(log, "Debug information");
/// debug!(log, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr $(,)?) => {{
        let _ = &$logger;
    }};
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # let log = hotlog::get_logger("demo");
/// use hotlog::info;
/// info!(log, "Application started");
/// info!(log, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(,)?) => {{
        let _ = &$logger;
    }};
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # let log = hotlog::get_logger("demo");
/// use hotlog::warn;
/// warn!(log, "Low disk space");
/// warn!(log, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr $(,)?) => {{
        let _ = &$logger;
    }};
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # let log = hotlog::get_logger("demo");
/// use hotlog::error;
/// error!(log, "Failed to open connection");
/// error!(log, "Error code: {}, message: {}", 500, "internal");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(,)?) => {{
        let _ = &$logger;
    }};
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// # let log = hotlog::get_logger("demo");
/// use hotlog::fatal;
/// fatal!(log, "Critical system failure");
/// fatal!(log, "Unable to recover: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(,)?) => {{
        let _ = &$logger;
    }};
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
