//! Hot-reload example
//!
//! Writes a config file, starts watching it and rewrites it while logging,
//! showing the effective level change without a restart.
//!
//! Run with: cargo run --example hot_reload

use std::time::Duration;

use hotlog::{configure, get_level, get_logger};

fn main() {
    let dir = std::env::temp_dir().join("hotlog-demo");
    std::fs::create_dir_all(&dir).expect("create demo dir");
    let path = dir.join("logconfig.json");

    std::fs::write(
        &path,
        r#"{ "level": "info", "watch": true, "watchStrategy": "notify" }"#,
    )
    .expect("write config");

    configure(path.as_path());
    let log = get_logger("reload-demo");

    println!("global level: {}", get_level());
    log.info("visible at info");
    log.debug("hidden at info");

    println!("rewriting config with level=debug ...");
    std::fs::write(
        &path,
        r#"{ "level": "debug", "watch": true, "watchStrategy": "notify" }"#,
    )
    .expect("rewrite config");

    // give the watcher a moment to pick the change up
    for _ in 0..50 {
        if get_level() == "debug" {
            break;
        }
        std::thread::sleep(Duration::from_millis(100));
    }

    println!("global level: {}", get_level());
    log.debug("now visible at debug");

    let _ = std::fs::remove_file(&path);
}
