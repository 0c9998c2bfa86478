use std::collections::BTreeSet;
use std::path::PathBuf;

/// Summary of what a set of configuration files declares, without
/// resolving any single environment.
///
/// Used by callers that need to enumerate work (one task per
/// environment, one lookup per service) before committing to a full
/// resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScannedConfig {
    /// Union of environment names across all readable files.
    pub environments: BTreeSet<String>,
    /// Union of service names with an entry under any `service_ports`
    /// path, root-level or nested inside a block.
    pub configured_services: BTreeSet<String>,
}

/// Outcome of parsing one file during a scan.
///
/// Scanning tolerates individual failures — a broken local override
/// must not hide the environments declared in the shared file — but
/// records them so they can be surfaced instead of silently dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// Parsed cleanly; counts of declared environments and ports.
    Ok { environments: usize, services: usize },
    /// Parse failed; the file was skipped.
    Failed { detail: String },
}

impl FileReport {
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, FileOutcome::Ok { .. })
    }
}
