use std::collections::BTreeMap;

use crate::core::errors::{ConfError, Result};
use crate::core::traits::placeholder::PlaceholderSource;

/// Explicit properties, highest-priority placeholder source.
///
/// Fed from repeated `--prop key=value` CLI arguments; anything passed
/// this way overrides the process environment.
pub struct MapSource {
    properties: BTreeMap<String, String>,
}

impl MapSource {
    pub fn new(properties: BTreeMap<String, String>) -> Self {
        Self { properties }
    }

    /// Build from raw `key=value` argument strings.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut properties = BTreeMap::new();
        for arg in args {
            let Some((key, value)) = arg.split_once('=') else {
                return Err(ConfError::InvalidConfig {
                    detail: format!("--prop expects key=value, got '{arg}'"),
                });
            };
            properties.insert(key.to_string(), value.to_string());
        }
        Ok(Self::new(properties))
    }
}

impl PlaceholderSource for MapSource {
    fn lookup(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_args_splits_on_first_equals() {
        let source =
            MapSource::from_args(&["url=http://x?a=b".to_string()]).unwrap();

        assert_eq!(source.lookup("url"), Some("http://x?a=b".to_string()));
    }

    #[test]
    fn from_args_rejects_missing_equals() {
        let result = MapSource::from_args(&["noequals".to_string()]);

        assert!(result.is_err());
    }

    #[test]
    fn lookup_misses_return_none() {
        let source = MapSource::new(BTreeMap::new());

        assert_eq!(source.lookup("anything"), None);
    }
}
