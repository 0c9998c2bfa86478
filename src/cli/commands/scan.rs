use crate::cli::commands::CommandContext;
use crate::cli::{context, output};
use crate::core::errors::Result;
use crate::core::models::scan_report::FileOutcome;
use crate::core::services::scan_service::ScanService;

/// Execute the `remoteconf scan` command.
///
/// Summarizes what the configuration files declare — environments and
/// configured services — without resolving any environment. Files that
/// fail to parse are reported and skipped, never fatal.
pub fn execute(strict: bool, props: &[String]) -> Result<()> {
    let ctx = CommandContext::build(strict, props)?;
    let dir = context::config_dir();
    let sources = context::load_sources(dir, &ctx.app)?;

    output::header("Configuration scan");

    if sources.is_empty() {
        output::warning(&format!(
            "No configuration files found in {}",
            dir.display()
        ));
        return Ok(());
    }

    let (summary, reports) = ScanService.scan(&ctx.parser, &sources);

    for report in &reports {
        match &report.outcome {
            FileOutcome::Ok {
                environments,
                services,
            } => output::success(&format!(
                "{} ({environments} environment(s), {services} service port(s))",
                report.path.display()
            )),
            FileOutcome::Failed { detail } => {
                output::warning(&format!("{} skipped: {detail}", report.path.display()));
            }
        }
    }

    output::header("Environments");
    if summary.environments.is_empty() {
        println!("  (none declared)");
    }
    for name in &summary.environments {
        println!("  {name}");
    }

    output::header("Configured services");
    if summary.configured_services.is_empty() {
        println!("  (none declared)");
    }
    for name in &summary.configured_services {
        println!("  {name}");
    }

    let parsed = reports.iter().filter(|r| r.is_ok()).count();
    println!();
    println!("  {parsed}/{} file(s) parsed", reports.len());

    Ok(())
}
