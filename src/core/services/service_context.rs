use std::collections::BTreeMap;

use crate::core::errors::{ConfError, Result};
use crate::core::models::parsed_config::FlatMap;

/// Derived, per-service view over a resolved environment map.
///
/// External runners need a handful of values computed from the resolved
/// configuration and a service name: the port binding, where the service
/// logs, how to start it, and the CI job that builds it. All of it is
/// pure string work over well-known dot-path keys.
#[derive(Debug)]
pub struct ServiceContext<'a> {
    resolved: &'a FlatMap,
    service: String,
    port: String,
    base_dir: String,
}

impl<'a> ServiceContext<'a> {
    /// Build the context, failing when the service has no port mapping.
    pub fn new(resolved: &'a FlatMap, service: &str) -> Result<Self> {
        let port = resolved
            .get(&format!("service_ports.{service}"))
            .cloned()
            .ok_or_else(|| ConfError::MissingServicePort {
                service: service.to_string(),
            })?;
        let base_dir = resolved
            .get("remote.base_dir")
            .cloned()
            .unwrap_or_default();
        Ok(Self {
            resolved,
            service: service.to_string(),
            port,
            base_dir,
        })
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    /// Substitute service-scoped placeholders in a configured value.
    ///
    /// Both the `${...}` and bare `$NAME` spellings are accepted, in
    /// both dotted and SCREAMING forms, because config files in the
    /// wild use all four.
    pub fn expand(&self, value: &str) -> String {
        value
            .replace("${service}", &self.service)
            .replace("${SERVICE_NAME}", &self.service)
            .replace("${remote.base.dir}", &self.base_dir)
            .replace("${REMOTE_BASE_DIR}", &self.base_dir)
            .replace("${SERVICE_PORT}", &self.port)
            .replace("$service", &self.service)
            .replace("$SERVICE_NAME", &self.service)
            .replace("$REMOTE_BASE_DIR", &self.base_dir)
            .replace("$SERVICE_PORT", &self.port)
    }

    /// Remote log file path: `log.filePattern` expanded, or the
    /// conventional `<base_dir>/../logs/<service>.log`.
    pub fn log_file_path(&self) -> String {
        match self.resolved.get("log.filePattern") {
            Some(pattern) => self.expand(pattern),
            None => format!("{}/../logs/{}.log", self.base_dir, self.service),
        }
    }

    /// Command used to follow the service log, with `${log.file}`
    /// pointing at `log_file_path()`.
    pub fn log_command(&self) -> String {
        let command = self
            .resolved
            .get("log.command")
            .map(String::as_str)
            .unwrap_or("tail -fn10000 ${log.file}");
        let log_file = self.log_file_path();
        self.expand(command)
            .replace("${log.file}", &log_file)
            .replace("$log.file", &log_file)
    }

    /// Command used to start the service on the remote host.
    pub fn start_command(&self) -> String {
        match self.resolved.get("start.command") {
            Some(command) => self.expand(command),
            None => format!("{}/{}/{}-start.sh", self.base_dir, self.service, self.service),
        }
    }

    /// Environment exported before the start command: every `env.*` key
    /// re-exported without the prefix, values expanded.
    pub fn start_env(&self) -> BTreeMap<String, String> {
        self.resolved
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix("env.")
                    .map(|name| (name.to_string(), self.expand(value)))
            })
            .collect()
    }

    /// CI job path for this service, if `jenkins.job` is configured.
    ///
    /// The expanded path gets `/<service>` appended when it does not
    /// already mention the service, so one shared job prefix covers a
    /// whole fleet of services.
    pub fn jenkins_job(&self) -> Option<String> {
        let job = self.expand(self.resolved.get("jenkins.job")?);
        if job.contains(&self.service) {
            Some(job)
        } else {
            Some(format!("{job}/{}", self.service))
        }
    }
}
