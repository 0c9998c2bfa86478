use crate::cli::commands::CommandContext;
use crate::cli::{context, output};
use crate::core::errors::{ConfError, Result};
use crate::core::models::parsed_config::FlatMap;
use crate::core::services::environment_resolver::EnvironmentResolver;

/// Execute the `remoteconf resolve` command.
///
/// Merges all configuration files, resolves the target environment's
/// inheritance, applies placeholders, and prints (or writes) the
/// resulting flat map.
pub fn execute(
    env: Option<&str>,
    out_path: Option<&str>,
    format: &str,
    strict: bool,
    props: &[String],
) -> Result<()> {
    let ctx = CommandContext::build(strict, props)?;
    let environment = ctx.environment(env)?;
    let dir = context::config_dir();
    let sources = context::require_sources(dir, &ctx.app)?;

    let resolver = EnvironmentResolver::new(&ctx.parser);
    if !resolver.is_declared(&sources, environment) {
        output::warning(&format!(
            "environment '{environment}' is not declared in any file; \
             resolving with service ports only"
        ));
    }

    let resolved = resolver.resolve(&sources, environment, &ctx.placeholders)?;
    let rendered = render(&resolved, format)?;

    match out_path {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            output::success(&format!(
                "Resolved {} key(s) for '{environment}'",
                resolved.len()
            ));
            output::success(&format!("Written to {path}"));
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn render(resolved: &FlatMap, format: &str) -> Result<String> {
    match format {
        "text" => {
            let mut out = String::new();
            for (key, value) in resolved {
                out.push_str(key);
                out.push_str(" = ");
                out.push_str(value);
                out.push('\n');
            }
            Ok(out)
        }
        "json" => {
            let mut out = serde_json::to_string_pretty(resolved).map_err(|e| {
                ConfError::InvalidConfig {
                    detail: format!("JSON serialization failed: {e}"),
                }
            })?;
            out.push('\n');
            Ok(out)
        }
        other => Err(ConfError::InvalidConfig {
            detail: format!("unknown format '{other}', expected 'text' or 'json'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> FlatMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn text_render_is_sorted_key_value_lines() {
        let rendered = render(&map(&[("b", "2"), ("a", "1")]), "text").unwrap();

        assert_eq!(rendered, "a = 1\nb = 2\n");
    }

    #[test]
    fn json_render_round_trips() {
        let rendered = render(&map(&[("ssh.server", "host")]), "json").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed["ssh.server"], "host");
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(render(&FlatMap::new(), "yaml").is_err());
    }
}
