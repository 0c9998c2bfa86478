use serde::Deserialize;
use std::path::Path;

use crate::core::errors::{ConfError, Result};

/// Optional tool configuration read from `remoteconf.toml`.
///
/// Absence is not an error — the defaults cover the conventional
/// `remote.yml` + `remote-local.yml` layering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Candidate configuration files, lowest priority first.
    pub files: Vec<String>,
    /// Environment used when `--env` is not passed.
    pub default_env: Option<String>,
    /// Reject misplaced lines instead of ignoring them.
    pub strict: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            files: vec!["remote.yml".to_string(), "remote-local.yml".to_string()],
            default_env: None,
            strict: false,
        }
    }
}

pub const CONFIG_FILE_NAME: &str = "remoteconf.toml";

impl AppConfig {
    /// Load `remoteconf.toml` from `dir`, falling back to defaults when
    /// the file does not exist.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfError::InvalidConfig {
            detail: format!("Failed to parse {CONFIG_FILE_NAME}: {e}"),
        })?;
        if config.files.is_empty() {
            return Err(ConfError::InvalidConfig {
                detail: format!("{CONFIG_FILE_NAME}: 'files' must not be empty"),
            });
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_absent() {
        let dir = tempfile::tempdir().unwrap();

        let config = AppConfig::load(dir.path()).unwrap();

        assert_eq!(config.files, vec!["remote.yml", "remote-local.yml"]);
        assert_eq!(config.default_env, None);
        assert!(!config.strict);
    }

    #[test]
    fn loads_overrides() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "files = [\"deploy.yml\"]\ndefault_env = \"dev\"\nstrict = true\n",
        )
        .unwrap();

        let config = AppConfig::load(dir.path()).unwrap();

        assert_eq!(config.files, vec!["deploy.yml"]);
        assert_eq!(config.default_env.as_deref(), Some("dev"));
        assert!(config.strict);
    }

    #[test]
    fn empty_files_list_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "files = []\n").unwrap();

        assert!(AppConfig::load(dir.path()).is_err());
    }

    #[test]
    fn malformed_toml_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "files = not-a-list\n").unwrap();

        assert!(AppConfig::load(dir.path()).is_err());
    }
}
