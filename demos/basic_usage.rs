//! Basic usage example
//!
//! Demonstrates category loggers, level checks and global configuration.
//!
//! Run with: cargo run --example basic_usage

use hotlog::prelude::*;
use hotlog::info;

fn main() {
    println!("=== hotlog - Basic Usage Example ===\n");

    configure(RawConfig {
        level: Some("debug".to_string()),
        ..Default::default()
    });

    let log = get_logger("example");

    println!("1. Enabled checks at level '{}':", log.get_level());
    println!("   trace enabled: {}", log.is_trace_enabled());
    println!("   debug enabled: {}", log.is_debug_enabled());
    println!("   info enabled:  {}", log.is_info_enabled());

    println!("\n2. Logging at different levels:");
    log.trace("should not show up");
    log.debug("a debug message");
    log.info("an info message");
    log.error(format_args!("Hello {}", "world"));
    info!(log, "Hello {} via macro", "world");

    println!("\n3. The default logger:");
    let root = get_logger("");
    root.info("Message using default logger");

    println!("\n4. Per-category overrides:");
    configure(RawConfig {
        level: Some("info".to_string()),
        levels: Some(
            [("example".to_string(), "error".to_string())]
                .into_iter()
                .collect(),
        ),
        ..Default::default()
    });
    log.info("hidden now - category raised to error");
    log.error("still visible");

    println!("\n=== Example completed ===");
}
