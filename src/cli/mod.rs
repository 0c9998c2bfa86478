pub mod commands;
pub mod context;
pub mod output;

use clap::{Parser, Subcommand};

/// Resolve layered remote-deployment configuration.
#[derive(Parser, Debug)]
#[command(name = "remoteconf", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing remote.yml / remote-local.yml
    #[arg(long, global = true)]
    pub dir: Option<String>,

    /// Target environment (falls back to default_env in remoteconf.toml)
    #[arg(long, global = true)]
    pub env: Option<String>,

    /// Placeholder property override, key=value. Repeatable.
    #[arg(long = "prop", global = true, value_name = "KEY=VALUE")]
    pub props: Vec<String>,

    /// Fail on misplaced lines instead of silently ignoring them
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List declared environments, configured services, and file status
    Scan,

    /// Print an environment's resolved configuration
    Resolve {
        /// Write the resolved map to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Look up the port mapped to a service
    Port {
        /// Service name under service_ports
        service: String,
    },

    /// Show derived runtime values for a service
    Service {
        /// Service name under service_ports
        name: String,
    },
}
