//! Config file loading

use std::path::Path;

use super::config::RawConfig;
use super::error::{ConfigError, Result};
use super::registry::Runtime;

/// Read `path`, parse it as a JSON settings document and apply it.
///
/// On success the path is recorded as the active config file, so a later
/// `watch: true` knows what to watch. Read and parse failures are reported on
/// stderr and the previously active configuration stays in effect
/// (last-good-config wins).
pub(crate) fn load_from_file(runtime: &Runtime, path: &Path) {
    match read_settings(path) {
        Ok(raw) => runtime.apply(raw, Some(path.to_path_buf())),
        Err(e) => eprintln!("[LOGGER ERROR] {e}"),
    }
}

fn read_settings(path: &Path) -> Result<RawConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::read(path.display().to_string(), e))?;
    let raw = serde_json::from_str(&content)?;
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_settings_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logconfig.json");
        std::fs::write(&path, r#"{ "level": "trace", "watch": false }"#).unwrap();

        let raw = read_settings(&path).unwrap();
        assert_eq!(raw.level.as_deref(), Some("trace"));
        assert_eq!(raw.watch, Some(false));
    }

    #[test]
    fn test_read_settings_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_settings(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_read_settings_unparsable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logconfig.json");
        std::fs::write(&path, "level = debug").unwrap();

        let err = read_settings(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
