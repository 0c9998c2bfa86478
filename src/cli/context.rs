use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::config::app_config::AppConfig;
use crate::core::errors::{ConfError, Result};
use crate::core::models::source::ConfigSource;

static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the global configuration directory.
/// If `custom` is provided, uses that path; otherwise the current directory.
pub fn init(custom: Option<&str>) {
    let dir = custom.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    let _ = CONFIG_DIR.set(dir);
}

/// Get the current configuration directory.
pub fn config_dir() -> &'static Path {
    CONFIG_DIR
        .get()
        .map(|p| p.as_path())
        .unwrap_or(Path::new("."))
}

/// Read every existing candidate file, lowest priority first.
///
/// Missing candidates are skipped silently — the local override file in
/// particular is usually absent. The returned list may be empty.
pub fn load_sources(dir: &Path, config: &AppConfig) -> Result<Vec<ConfigSource>> {
    let mut sources = Vec::new();
    for name in &config.files {
        let path = dir.join(name);
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            sources.push(ConfigSource::new(path, content));
        }
    }
    Ok(sources)
}

/// Like `load_sources`, but an empty result is an error listing every
/// path that was consulted.
pub fn require_sources(dir: &Path, config: &AppConfig) -> Result<Vec<ConfigSource>> {
    let sources = load_sources(dir, config)?;
    if sources.is_empty() {
        let searched = config
            .files
            .iter()
            .map(|name| format!("✗ {}", dir.join(name).display()))
            .collect::<Vec<_>>()
            .join("\n    ");
        return Err(ConfError::NoConfigFiles { searched });
    }
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_missing_candidates() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("remote.yml"), "service_ports:\n  app: 1\n").unwrap();

        let sources = load_sources(dir.path(), &AppConfig::default()).unwrap();

        assert_eq!(sources.len(), 1);
        assert!(sources[0].path.ends_with("remote.yml"));
    }

    #[test]
    fn orders_sources_by_candidate_priority() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("remote-local.yml"), "a").unwrap();
        std::fs::write(dir.path().join("remote.yml"), "b").unwrap();

        let sources = load_sources(dir.path(), &AppConfig::default()).unwrap();

        assert_eq!(sources.len(), 2);
        assert!(sources[0].path.ends_with("remote.yml"));
        assert!(sources[1].path.ends_with("remote-local.yml"));
    }

    #[test]
    fn require_sources_lists_searched_paths() {
        let dir = tempfile::tempdir().unwrap();

        let err = require_sources(dir.path(), &AppConfig::default()).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("remote.yml"));
        assert!(msg.contains("remote-local.yml"));
    }
}
