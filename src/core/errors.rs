use std::path::PathBuf;

/// All domain errors for remoteconf.
///
/// Each variant provides enough context to diagnose the issue
/// without needing to inspect engine internals.
#[derive(Debug, thiserror::Error)]
pub enum ConfError {
    #[error(
        "No configuration file found\n\n  \
         Searched for:\n    \
         {searched}\n\n  \
         Create a remote.yml with common/environments/service_ports sections,\n  \
         or point --dir at the directory that contains one."
    )]
    NoConfigFiles { searched: String },

    #[error(
        "Parse error in {file}: {detail}\n\n  \
         Expected an indentation-based file using spaces (no tabs),\n  \
         with 'key:' for nesting and 'key: value' for leaves."
    )]
    ParseError { file: PathBuf, detail: String },

    #[error(
        "Environment '{environment}' extends unknown common block '{block}'\n\n  \
         Available common blocks: {available}\n  \
         Fix the 'extends:' line or declare the block under 'common:'."
    )]
    MissingExtends {
        environment: String,
        block: String,
        available: String,
    },

    #[error(
        "No port mapping found for service '{service}'\n\n  \
         Add an entry under service_ports in remote.yml:\n    \
         service_ports:\n      \
         {service}: 8080"
    )]
    MissingServicePort { service: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfError>;
