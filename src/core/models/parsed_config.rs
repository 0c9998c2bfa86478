use std::collections::BTreeMap;
use std::path::PathBuf;

/// A flattened `dot.path -> value` map.
pub type FlatMap = BTreeMap<String, String>;

/// The stable parse result of one configuration file.
///
/// Every block beneath `common:` and `environments:` is flattened to
/// dot-paths relative to the block name; `service_ports:` entries are
/// stored directly. Never mutated after parsing — merging produces
/// fresh values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedConfig {
    /// Named reusable blocks under `common:` (e.g. `base`), each flattened.
    pub common_blocks: BTreeMap<String, FlatMap>,
    /// Named environments under `environments:` (e.g. `dev`), each flattened.
    pub env_blocks: BTreeMap<String, FlatMap>,
    /// Root-level `service_ports:` entries, service name to port string.
    pub service_ports: FlatMap,
    /// Where this config was read from, when known.
    pub source_path: Option<PathBuf>,
}

impl ParsedConfig {
    /// Names of all environments declared in this file.
    pub fn environment_names(&self) -> impl Iterator<Item = &str> {
        self.env_blocks.keys().map(String::as_str)
    }
}
