use std::collections::BTreeSet;

use crate::core::models::parsed_config::{FlatMap, ParsedConfig};
use crate::core::models::scan_report::{FileOutcome, FileReport, ScannedConfig};
use crate::core::models::source::ConfigSource;
use crate::core::traits::parser::ConfigParser;

/// Derives the "what exists" summary from a set of config files.
///
/// Callers use this to enumerate work — one deployment task per
/// environment, one lookup per configured service — without resolving
/// any single environment's full configuration.
pub struct ScanService;

impl ScanService {
    /// Parse each source independently and union the results.
    ///
    /// A file that fails to parse is skipped, not fatal: a broken local
    /// override must not hide the environments declared in the shared
    /// file. Every file's outcome is recorded in the returned reports
    /// so partial failure stays observable.
    pub fn scan(
        &self,
        parser: &dyn ConfigParser,
        sources: &[ConfigSource],
    ) -> (ScannedConfig, Vec<FileReport>) {
        let mut summary = ScannedConfig::default();
        let mut reports = Vec::with_capacity(sources.len());

        for source in sources {
            match parser.parse(&source.content, &source.path) {
                Ok(config) => {
                    reports.push(FileReport {
                        path: source.path.clone(),
                        outcome: FileOutcome::Ok {
                            environments: config.env_blocks.len(),
                            services: config.service_ports.len(),
                        },
                    });
                    Self::collect(&mut summary, &config);
                }
                Err(err) => {
                    reports.push(FileReport {
                        path: source.path.clone(),
                        outcome: FileOutcome::Failed {
                            detail: err.to_string(),
                        },
                    });
                }
            }
        }

        (summary, reports)
    }

    fn collect(summary: &mut ScannedConfig, config: &ParsedConfig) {
        summary
            .environments
            .extend(config.environment_names().map(str::to_string));

        summary
            .configured_services
            .extend(config.service_ports.keys().cloned());
        for block in config.common_blocks.values() {
            summary.configured_services.extend(extract_services(block));
        }
        for block in config.env_blocks.values() {
            summary.configured_services.extend(extract_services(block));
        }
    }
}

/// Service names from any flattened path routed through `service_ports`,
/// whether the component sits at the start of the path or nested deeper.
fn extract_services(map: &FlatMap) -> BTreeSet<String> {
    let mut services = BTreeSet::new();
    for key in map.keys() {
        if let Some(rest) = key.strip_prefix("service_ports.") {
            services.insert(rest.to_string());
        } else if let Some(pos) = key.find(".service_ports.") {
            services.insert(key[pos + ".service_ports.".len()..].to_string());
        }
    }
    services
}
