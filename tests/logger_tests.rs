//! Logger write-path behavior
//!
//! Uses a capturing sink to observe exactly what reaches the write path.
//! Global-state tests, so serialized.

use std::collections::HashMap;
use std::sync::Arc;

use hotlog::{configure, get_logger, reset, LogLevel, RawConfig, Sink};
use parking_lot::Mutex;
use serial_test::serial;

type Captured = Arc<Mutex<Vec<String>>>;

fn capture_sink() -> (Sink, Captured) {
    let lines: Captured = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&lines);
    let sink: Sink = Arc::new(move |line: &str| {
        captured.lock().push(line.to_string());
    });
    (sink, lines)
}

/// Configure with a capturing sink and timestamps disabled, so formatted
/// lines are deterministic.
fn configure_captured(raw: RawConfig) -> Captured {
    let (sink, lines) = capture_sink();
    configure(RawConfig {
        date_format: Some(None),
        sink: Some(sink),
        ..raw
    });
    lines
}

#[test]
#[serial]
fn test_enabled_checks_at_info() {
    reset();
    configure(RawConfig {
        level: Some("info".to_string()),
        ..Default::default()
    });

    let log = get_logger("checks");
    assert!(!log.is_trace_enabled());
    assert!(!log.is_debug_enabled());
    assert!(log.is_info_enabled());
    assert!(log.is_warn_enabled());
    assert!(log.is_error_enabled());
    assert!(log.is_fatal_enabled());
}

#[test]
#[serial]
fn test_disabled_call_never_reaches_sink() {
    reset();
    let lines = configure_captured(RawConfig {
        level: Some("info".to_string()),
        ..Default::default()
    });

    let log = get_logger("filter");
    log.debug("msg");
    assert!(lines.lock().is_empty());

    log.info("msg");
    let lines = lines.lock();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("msg"));
}

#[test]
#[serial]
fn test_line_format_with_category() {
    reset();
    let lines = configure_captured(RawConfig {
        level: Some("info".to_string()),
        ..Default::default()
    });

    get_logger("server").warn("careful");
    assert_eq!(lines.lock().as_slice(), ["[WARN] server - careful"]);
}

#[test]
#[serial]
fn test_default_logger_line_has_no_category() {
    reset();
    let lines = configure_captured(RawConfig {
        level: Some("info".to_string()),
        ..Default::default()
    });

    get_logger("").info("hello");
    assert_eq!(lines.lock().as_slice(), ["[INFO] - hello"]);
}

#[test]
#[serial]
fn test_timestamp_prefixes_the_line() {
    reset();
    let (sink, lines) = capture_sink();
    // a literal pattern keeps the output deterministic
    configure(RawConfig {
        level: Some("info".to_string()),
        date_format: Some(Some("ts".to_string())),
        sink: Some(sink),
        ..Default::default()
    });

    get_logger("server").info("hi");
    assert_eq!(lines.lock().as_slice(), ["ts: [INFO] server - hi"]);
}

#[test]
#[serial]
fn test_per_category_threshold_respected() {
    reset();
    let lines = configure_captured(RawConfig {
        level: Some("info".to_string()),
        levels: Some(HashMap::from([("db".to_string(), "error".to_string())])),
        ..Default::default()
    });

    let db = get_logger("db");
    db.warn("hidden");
    assert!(lines.lock().is_empty());

    db.error("shown");
    assert_eq!(lines.lock().len(), 1);
}

#[test]
#[serial]
fn test_zero_argument_macros_never_reach_sink() {
    reset();
    let lines = configure_captured(RawConfig {
        level: Some("all".to_string()),
        ..Default::default()
    });

    let log = get_logger("typo");
    hotlog::trace!(log);
    hotlog::debug!(log);
    hotlog::info!(log);
    hotlog::warn!(log);
    hotlog::error!(log);
    hotlog::fatal!(log);
    hotlog::log!(log, LogLevel::Info);

    assert!(lines.lock().is_empty());
}

#[test]
#[serial]
fn test_macro_formatting_reaches_sink() {
    reset();
    let lines = configure_captured(RawConfig {
        level: Some("debug".to_string()),
        ..Default::default()
    });

    let log = get_logger("fmt");
    hotlog::debug!(log, "value is {}", 42);
    hotlog::info!(log, "{}-{}", "a", "b");

    let lines = lines.lock();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "[DEBUG] fmt - value is 42");
    assert_eq!(lines[1], "[INFO] fmt - a-b");
}

#[test]
#[serial]
fn test_sentinel_levels_never_write() {
    reset();
    let lines = configure_captured(RawConfig {
        level: Some("all".to_string()),
        ..Default::default()
    });

    let log = get_logger("sentinels");
    log.log(LogLevel::All, "not a message severity");
    log.log(LogLevel::Off, "not a message severity");
    log.log(LogLevel::Silent, "not a message severity");

    assert!(lines.lock().is_empty());
}

#[test]
#[serial]
fn test_get_level_names() {
    reset();
    configure(RawConfig {
        level: Some("warn".to_string()),
        levels: Some(HashMap::from([("db".to_string(), "trace".to_string())])),
        ..Default::default()
    });

    assert_eq!(get_logger("db").get_level(), "trace");
    assert_eq!(get_logger("other").get_level(), "warn");
    assert_eq!(get_logger("").get_level(), "warn");
}
