use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

use super::EngineControl;
use crate::config::BootstrapConfig;
use crate::errors::ServiceError;

/// Splits a command template into program and arguments, substituting `{service}`.
pub(crate) fn render_command(template: &str, service: &str) -> Option<(String, Vec<String>)> {
    let mut parts = template
        .split_whitespace()
        .map(|part| part.replace("{service}", service));
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// True when `marker` appears as a whole token in the status output.
/// `systemctl is-active` prints `inactive` for a stopped unit, which must not match `active`.
pub(crate) fn output_reports_running(output: &str, marker: &str) -> bool {
    output
        .split(|c: char| c.is_whitespace() || c == ':')
        .any(|token| token.eq_ignore_ascii_case(marker))
}

/// Controls an OS-managed database service through configurable command templates.
#[derive(Debug, Clone)]
pub struct SystemEngineControl {
    detect_command: String,
    status_command: String,
    start_command: String,
    running_marker: String,
}

impl SystemEngineControl {
    pub fn from_config(config: &BootstrapConfig) -> Self {
        Self {
            detect_command: config.detect_command.clone(),
            status_command: config.status_command.clone(),
            start_command: config.start_command.clone(),
            running_marker: config.running_marker.clone(),
        }
    }

    async fn run(&self, template: &str, service: &str) -> Result<std::process::Output, ServiceError> {
        let (program, args) = render_command(template, service).ok_or_else(|| {
            ServiceError::BootstrapError(format!("Empty command template for service {}", service))
        })?;
        debug!(%program, ?args, "Running service control command");

        Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| ServiceError::BootstrapError(format!("Failed to run {}: {}", program, e)))
    }
}

#[async_trait]
impl EngineControl for SystemEngineControl {
    async fn is_installed(&self, service: &str) -> bool {
        match self.run(&self.detect_command, service).await {
            Ok(output) => output.status.success(),
            Err(e) => {
                warn!(service, error = %e, "Service detection failed");
                false
            }
        }
    }

    async fn is_running(&self, service: &str) -> bool {
        match self.run(&self.status_command, service).await {
            Ok(output) => {
                output_reports_running(&String::from_utf8_lossy(&output.stdout), &self.running_marker)
            }
            Err(e) => {
                warn!(service, error = %e, "Service status query failed");
                false
            }
        }
    }

    async fn start(&self, service: &str) -> Result<(), ServiceError> {
        let output = self.run(&self.start_command, service).await?;
        if output.status.success() {
            Ok(())
        } else {
            Err(ServiceError::BootstrapError(format!(
                "Failed to start service {}: {}",
                service,
                String::from_utf8_lossy(&output.stderr).trim()
            )))
        }
    }

    async fn install(&self, installer: &Path) -> Result<bool, ServiceError> {
        let is_powershell = installer
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("ps1"));

        let mut command = if is_powershell {
            let mut c = Command::new("powershell.exe");
            c.args(["-NoProfile", "-ExecutionPolicy", "Bypass", "-File"])
                .arg(installer);
            c
        } else {
            Command::new(installer)
        };

        let status = command.status().await.map_err(|e| {
            ServiceError::BootstrapError(format!(
                "Failed to run installer {}: {}",
                installer.display(),
                e
            ))
        })?;
        Ok(status.success())
    }
}

/// An SQLite file needs no service: it is always installed and running.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedEngine;

#[async_trait]
impl EngineControl for EmbeddedEngine {
    async fn is_installed(&self, _service: &str) -> bool {
        true
    }

    async fn is_running(&self, _service: &str) -> bool {
        true
    }

    async fn start(&self, _service: &str) -> Result<(), ServiceError> {
        Ok(())
    }

    async fn install(&self, _installer: &Path) -> Result<bool, ServiceError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn renders_service_placeholder() {
        let (program, args) = render_command("systemctl is-active {service}", "postgresql").unwrap();
        assert_eq!(program, "systemctl");
        assert_eq!(args, vec!["is-active", "postgresql"]);
    }

    #[test]
    fn blank_template_renders_nothing() {
        assert!(render_command("   ", "x").is_none());
    }

    #[rstest]
    #[case("active\n", "active", true)]
    #[case("inactive\n", "active", false)]
    #[case("        STATE              : 4  RUNNING\n", "RUNNING", true)]
    #[case("        STATE              : 1  STOPPED\n", "RUNNING", false)]
    fn status_marker_matches_whole_tokens(
        #[case] output: &str,
        #[case] marker: &str,
        #[case] running: bool,
    ) {
        assert_eq!(output_reports_running(output, marker), running);
    }
}
