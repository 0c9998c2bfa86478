pub mod port;
pub mod resolve;
pub mod scan;
pub mod service;

use crate::adapters::parsers::yaml_subset_parser::YamlSubsetParser;
use crate::adapters::sources::map_source::MapSource;
use crate::adapters::sources::process_env::ProcessEnvSource;
use crate::config::app_config::AppConfig;
use crate::core::errors::{ConfError, Result};
use crate::core::services::placeholder_resolver::PlaceholderResolver;

/// Shared per-invocation setup: tool config, parser, placeholder chain.
pub struct CommandContext {
    pub app: AppConfig,
    pub parser: YamlSubsetParser,
    pub placeholders: PlaceholderResolver,
}

impl CommandContext {
    pub fn build(strict_flag: bool, props: &[String]) -> Result<Self> {
        let app = AppConfig::load(crate::cli::context::config_dir())?;
        let parser = if strict_flag || app.strict {
            YamlSubsetParser::strict()
        } else {
            YamlSubsetParser::new()
        };
        // Explicit properties win over the process environment.
        let placeholders = PlaceholderResolver::new(vec![
            Box::new(MapSource::from_args(props)?),
            Box::new(ProcessEnvSource),
        ]);
        Ok(Self {
            app,
            parser,
            placeholders,
        })
    }

    /// The environment to operate on: `--env`, else the configured default.
    pub fn environment<'a>(&'a self, flag: Option<&'a str>) -> Result<&'a str> {
        flag.or(self.app.default_env.as_deref()).ok_or_else(|| {
            ConfError::InvalidConfig {
                detail: "no environment specified; pass --env <name> or set \
                         default_env in remoteconf.toml"
                    .into(),
            }
        })
    }
}
