use crate::cli::commands::CommandContext;
use crate::cli::context;
use crate::core::errors::Result;
use crate::core::services::environment_resolver::EnvironmentResolver;
use crate::core::services::service_context::ServiceContext;

/// Execute the `remoteconf port <service>` command.
///
/// Prints the bare port number so the output can be captured by
/// scripts; everything else goes through the resolved environment, so
/// file layering and overrides behave exactly as for `resolve`.
pub fn execute(service: &str, env: Option<&str>, strict: bool, props: &[String]) -> Result<()> {
    let ctx = CommandContext::build(strict, props)?;
    let environment = ctx.environment(env)?;
    let sources = context::require_sources(context::config_dir(), &ctx.app)?;

    let resolved =
        EnvironmentResolver::new(&ctx.parser).resolve(&sources, environment, &ctx.placeholders)?;
    let service_ctx = ServiceContext::new(&resolved, service)?;

    println!("{}", service_ctx.port());
    Ok(())
}
