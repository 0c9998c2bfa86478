use crate::cli::commands::CommandContext;
use crate::cli::{context, output};
use crate::core::errors::Result;
use crate::core::services::environment_resolver::EnvironmentResolver;
use crate::core::services::service_context::ServiceContext;

/// Execute the `remoteconf service <name>` command.
///
/// Shows every value an external runner derives for one service: the
/// port binding, log location and follow command, start command and
/// environment, and the CI job path.
pub fn execute(name: &str, env: Option<&str>, strict: bool, props: &[String]) -> Result<()> {
    let ctx = CommandContext::build(strict, props)?;
    let environment = ctx.environment(env)?;
    let sources = context::require_sources(context::config_dir(), &ctx.app)?;

    let resolved =
        EnvironmentResolver::new(&ctx.parser).resolve(&sources, environment, &ctx.placeholders)?;
    let service_ctx = ServiceContext::new(&resolved, name)?;

    output::header(&format!("Service '{name}' in environment '{environment}'"));
    println!("  Port:          {}", service_ctx.port());
    println!("  Log file:      {}", service_ctx.log_file_path());
    println!("  Log command:   {}", service_ctx.log_command());
    println!("  Start command: {}", service_ctx.start_command());

    match service_ctx.jenkins_job() {
        Some(job) => println!("  Jenkins job:   {job}"),
        None => println!("  Jenkins job:   (not configured)"),
    }

    let start_env = service_ctx.start_env();
    if !start_env.is_empty() {
        output::header("Start environment");
        for (key, value) in &start_env {
            println!("  {key}={value}");
        }
    }

    Ok(())
}
