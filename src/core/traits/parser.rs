use std::path::Path;

use crate::core::errors::Result;
use crate::core::models::parsed_config::ParsedConfig;

/// Port for parsing configuration file content.
///
/// Only the `remote.yml` subset parser ships today; the trait keeps the
/// engine independent of the concrete syntax, and lets tests substitute
/// canned parse results.
pub trait ConfigParser: Send + Sync {
    /// Parse raw file content into a `ParsedConfig`.
    ///
    /// `source` identifies the file in error messages only; the parser
    /// never touches the filesystem.
    fn parse(&self, content: &str, source: &Path) -> Result<ParsedConfig>;
}
