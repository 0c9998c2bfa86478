use std::collections::BTreeMap;

use crate::core::errors::{ConfError, Result};
use crate::core::models::parsed_config::{FlatMap, ParsedConfig};

/// Merges layered configuration files and resolves environments.
///
/// Both operations are pure: inputs are never mutated, every call
/// produces a fresh value. Merge policy throughout is "later wins",
/// applied per dot-path for flattened blocks.
pub struct ConfigMerger;

impl ConfigMerger {
    /// Deep-merge a priority-ordered list of parsed files.
    ///
    /// Earlier entries are lower priority — e.g. the shared `remote.yml`
    /// first, the local override `remote-local.yml` last. Blocks with
    /// the same name union their dot-path maps, with the later file
    /// winning on identical paths; `service_ports` merges as a flat map
    /// the same way.
    pub fn merge_all(&self, configs: &[ParsedConfig]) -> ParsedConfig {
        let mut merged = ParsedConfig::default();
        for config in configs {
            Self::merge_blocks(&mut merged.common_blocks, &config.common_blocks);
            Self::merge_blocks(&mut merged.env_blocks, &config.env_blocks);
            merged.service_ports.extend(config.service_ports.clone());
        }
        merged
    }

    fn merge_blocks(into: &mut BTreeMap<String, FlatMap>, from: &BTreeMap<String, FlatMap>) {
        for (name, block) in from {
            into.entry(name.clone()).or_default().extend(block.clone());
        }
    }

    /// Resolve one environment's effective flat configuration.
    ///
    /// Precedence, lowest to highest:
    /// 1. the `extends` target block from `common` (if declared);
    /// 2. the environment's own keys — including `extends` itself, which
    ///    stays visible in the output for diagnostics;
    /// 3. root `service_ports` entries under the `service_ports.<name>`
    ///    prefix, which are process-wide facts and always win.
    ///
    /// An environment absent from `env_blocks` resolves as an empty
    /// block — it may legitimately carry nothing of its own. An
    /// `extends` naming a block missing from `common` is an error.
    pub fn resolve(&self, merged: &ParsedConfig, environment: &str) -> Result<FlatMap> {
        let empty = FlatMap::new();
        let env_map = merged.env_blocks.get(environment).unwrap_or(&empty);

        let mut resolved = match env_map.get("extends") {
            Some(block) => merged
                .common_blocks
                .get(block)
                .cloned()
                .ok_or_else(|| ConfError::MissingExtends {
                    environment: environment.to_string(),
                    block: block.clone(),
                    available: Self::describe_keys(&merged.common_blocks),
                })?,
            None => FlatMap::new(),
        };

        resolved.extend(env_map.clone());

        for (service, port) in &merged.service_ports {
            resolved.insert(format!("service_ports.{service}"), port.clone());
        }

        Ok(resolved)
    }

    fn describe_keys(blocks: &BTreeMap<String, FlatMap>) -> String {
        if blocks.is_empty() {
            "(none)".to_string()
        } else {
            blocks.keys().cloned().collect::<Vec<_>>().join(", ")
        }
    }
}
