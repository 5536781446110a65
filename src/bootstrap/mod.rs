//! Database bootstrap.
//!
//! Brings the configured engine to a usable state before the application opens
//! its pool: detect the engine, install it when asked to, start the service,
//! create the application database and pick the first candidate URL that
//! answers. Each step either advances or ends the run with a failure result.

mod engine;
mod provision;

pub use engine::{EmbeddedEngine, SystemEngineControl};
pub use provision::{PostgresProvisioner, SqliteProvisioner};

use async_trait::async_trait;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{info, instrument, warn};

use crate::config::{BootstrapConfig, EngineKind};
use crate::errors::ServiceError;

/// Service control of a database engine.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EngineControl: Send + Sync {
    /// True when a service of this name exists on the machine.
    async fn is_installed(&self, service: &str) -> bool;

    async fn is_running(&self, service: &str) -> bool;

    async fn start(&self, service: &str) -> Result<(), ServiceError>;

    /// Runs the installer; `Ok(true)` when it exits with status 0.
    async fn install(&self, installer: &Path) -> Result<bool, ServiceError>;
}

/// Creation and probing of the application database.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseProvisioner: Send + Sync {
    /// Value substituted for `{database}` in candidate URLs.
    fn database_ref(&self, name: &str) -> String;

    /// Creates the database when missing; `Ok(true)` when it was created.
    async fn ensure_database(&self, name: &str) -> Result<bool, ServiceError>;

    /// True when `url` connects and answers a ping.
    async fn probe(&self, url: &str) -> bool;
}

/// Outcome of a bootstrap run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BootstrapResult {
    pub success: bool,
    pub engine_installed: bool,
    pub engine_started: bool,
    pub database_initialized: bool,
    pub error_message: Option<String>,
    pub connection_url: Option<String>,
}

impl BootstrapResult {
    fn fail(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(error = %message, "Bootstrap failed");
        self.success = false;
        self.error_message = Some(message);
        self
    }
}

pub struct Bootstrapper<E, P> {
    config: BootstrapConfig,
    engine: E,
    provisioner: P,
}

impl<E, P> Bootstrapper<E, P>
where
    E: EngineControl,
    P: DatabaseProvisioner,
{
    pub fn new(config: BootstrapConfig, engine: E, provisioner: P) -> Self {
        Self {
            config,
            engine,
            provisioner,
        }
    }

    async fn detect(&self) -> Option<String> {
        for service in &self.config.service_names {
            if self.engine.is_installed(service).await {
                return Some(service.clone());
            }
        }
        None
    }

    async fn wait_until_running(&self, service: &str) -> bool {
        let deadline = Instant::now() + Duration::from_secs(self.config.startup_timeout_secs);
        let interval = Duration::from_millis(self.config.poll_interval_millis);
        loop {
            if self.engine.is_running(service).await {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            sleep(interval).await;
        }
    }

    #[instrument(skip(self), fields(engine = ?self.config.engine))]
    pub async fn run(&self, install_if_missing: bool) -> BootstrapResult {
        let mut result = BootstrapResult::default();

        info!("Detecting database engine");
        let service = match self.detect().await {
            Some(service) => service,
            None => {
                if !install_if_missing {
                    return result.fail("Database engine is not installed");
                }
                let Some(installer) = self
                    .config
                    .installer_path
                    .as_deref()
                    .map(Path::new)
                    .filter(|p| p.exists())
                else {
                    return result.fail("Database engine is not installed and no installer is available");
                };

                info!(installer = %installer.display(), "Installing database engine");
                match self.engine.install(installer).await {
                    Ok(true) => {}
                    Ok(false) => return result.fail("Database engine installation failed"),
                    Err(e) => return result.fail(e.to_string()),
                }
                sleep(Duration::from_secs(self.config.install_settle_secs)).await;

                match self.detect().await {
                    Some(service) => service,
                    None => {
                        return result.fail("Database engine still not found after installation")
                    }
                }
            }
        };
        result.engine_installed = true;

        if !self.engine.is_running(&service).await {
            info!(%service, "Starting database service");
            if let Err(e) = self.engine.start(&service).await {
                return result.fail(e.to_string());
            }
            if !self.wait_until_running(&service).await {
                return result.fail(format!(
                    "Service {} was started but did not become ready within {} s",
                    service, self.config.startup_timeout_secs
                ));
            }
        }
        result.engine_started = true;

        match self.provisioner.ensure_database(&self.config.database_name).await {
            Ok(created) => info!(database = %self.config.database_name, created, "Database ready"),
            Err(e) => return result.fail(format!("Database initialization failed: {}", e)),
        }
        result.database_initialized = true;

        let database_ref = self.provisioner.database_ref(&self.config.database_name);
        for template in &self.config.candidate_urls {
            let url = template.replace("{database}", &database_ref);
            if self.provisioner.probe(&url).await {
                info!("Bootstrap complete");
                result.connection_url = Some(url);
                result.success = true;
                return result;
            }
        }

        result.fail("No candidate connection URL responded")
    }
}

/// Runs the bootstrap sequence for the engine named in `config`.
pub async fn run_configured(config: &BootstrapConfig, install_if_missing: bool) -> BootstrapResult {
    match config.engine {
        EngineKind::Embedded => {
            Bootstrapper::new(
                config.clone(),
                EmbeddedEngine,
                SqliteProvisioner::new(&config.data_dir),
            )
            .run(install_if_missing)
            .await
        }
        EngineKind::Service => {
            let Some(admin_url) = config.admin_url.clone() else {
                return BootstrapResult::default()
                    .fail("bootstrap.admin_url is required for a service engine");
            };
            Bootstrapper::new(
                config.clone(),
                SystemEngineControl::from_config(config),
                PostgresProvisioner::new(admin_url),
            )
            .run(install_if_missing)
            .await
        }
    }
}
