use crate::core::errors::{ConfError, Result};
use crate::core::models::parsed_config::FlatMap;
use crate::core::models::source::ConfigSource;
use crate::core::services::config_merger::ConfigMerger;
use crate::core::services::placeholder_resolver::PlaceholderResolver;
use crate::core::traits::parser::ConfigParser;

/// End-to-end resolution of one environment from raw file sources.
///
/// Pipeline: parse each file, deep-merge in priority order, resolve the
/// environment against its `extends` base, overlay service ports, then
/// substitute placeholders. Unlike scanning, a parse failure here is
/// fatal — a resolution built on half the input would be silently wrong.
pub struct EnvironmentResolver<'a> {
    parser: &'a dyn ConfigParser,
}

impl<'a> EnvironmentResolver<'a> {
    pub fn new(parser: &'a dyn ConfigParser) -> Self {
        Self { parser }
    }

    pub fn resolve(
        &self,
        sources: &[ConfigSource],
        environment: &str,
        placeholders: &PlaceholderResolver,
    ) -> Result<FlatMap> {
        if sources.is_empty() {
            return Err(ConfError::NoConfigFiles {
                searched: "(no configuration sources provided)".to_string(),
            });
        }

        let mut configs = Vec::with_capacity(sources.len());
        for source in sources {
            configs.push(self.parser.parse(&source.content, &source.path)?);
        }

        let merged = ConfigMerger.merge_all(&configs);
        let resolved = ConfigMerger.resolve(&merged, environment)?;
        Ok(placeholders.resolve_map(&resolved))
    }

    /// Whether any loaded file declares this environment by name.
    ///
    /// Resolution itself tolerates unknown names (an environment may be
    /// nothing but its `extends` defaults), so the CLI uses this to warn
    /// about probable typos instead of failing.
    pub fn is_declared(&self, sources: &[ConfigSource], environment: &str) -> bool {
        sources.iter().any(|source| {
            self.parser
                .parse(&source.content, &source.path)
                .map(|config| config.env_blocks.contains_key(environment))
                .unwrap_or(false)
        })
    }
}
