mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    cli::context::init(args.dir.as_deref());
    let env = args.env.as_deref();

    let result = match &args.command {
        Commands::Scan => cli::commands::scan::execute(args.strict, &args.props),
        Commands::Resolve { output, format } => cli::commands::resolve::execute(
            env,
            output.as_deref(),
            format,
            args.strict,
            &args.props,
        ),
        Commands::Port { service } => {
            cli::commands::port::execute(service, env, args.strict, &args.props)
        }
        Commands::Service { name } => {
            cli::commands::service::execute(name, env, args.strict, &args.props)
        }
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
