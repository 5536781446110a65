use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{fmt::MakeWriter, EnvFilter};
use validator::{Validate, ValidationError};

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_DATABASE_URL: &str = "sqlite://ticari.db?mode=rwc";
const DEFAULT_CURRENCY: &str = "TRY";
const DEFAULT_KDV_ORANI: u32 = 20;
const DEFAULT_DATABASE_NAME: &str = "ticari";
const DEFAULT_STARTUP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_POLL_INTERVAL_MILLIS: u64 = 1000;
const DEFAULT_INSTALL_SETTLE_SECS: u64 = 5;
const CONFIG_DIR: &str = "config";
const ENV_PREFIX: &str = "TICARI";

/// Which kind of database engine the bootstrap sequence manages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// SQLite file next to the application; nothing to install or start.
    Embedded,
    /// A server engine managed as an operating-system service.
    Service,
}

impl Default for EngineKind {
    fn default() -> Self {
        EngineKind::Embedded
    }
}

/// Bootstrap configuration
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Run the bootstrap sequence before opening the database; startup aborts when it fails
    #[serde(default)]
    pub on_startup: bool,
    /// Let the startup bootstrap run the installer when no engine is detected
    #[serde(default)]
    pub install_if_missing: bool,
    /// Engine managed by the bootstrap sequence
    #[serde(default)]
    pub engine: EngineKind,
    /// Service names probed in order during detection
    #[serde(default = "default_service_names")]
    #[validate(length(min = 1))]
    pub service_names: Vec<String>,
    /// Installer executed when the engine is missing and installation is requested
    #[serde(default)]
    pub installer_path: Option<String>,
    /// Command whose zero exit status means the service exists; `{service}` is substituted
    #[serde(default = "default_detect_command")]
    pub detect_command: String,
    /// Command printing the service state; `{service}` is substituted
    #[serde(default = "default_status_command")]
    pub status_command: String,
    /// Token in the status output that marks a running service
    #[serde(default = "default_running_marker")]
    pub running_marker: String,
    /// Command starting the service; `{service}` is substituted
    #[serde(default = "default_start_command")]
    pub start_command: String,
    /// Seconds to wait after a successful install before detecting again
    #[serde(default = "default_install_settle_secs")]
    pub install_settle_secs: u64,
    /// Upper bound for the readiness poll after starting the service
    #[serde(default = "default_startup_timeout_secs")]
    #[validate(range(min = 1))]
    pub startup_timeout_secs: u64,
    /// Interval between readiness checks
    #[serde(default = "default_poll_interval_millis")]
    #[validate(range(min = 1))]
    pub poll_interval_millis: u64,
    /// Application database created when missing
    #[serde(default = "default_database_name")]
    #[validate(length(min = 1, max = 63), custom = "validate_database_name")]
    pub database_name: String,
    /// Directory holding SQLite database files (embedded engine)
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Maintenance connection used to create databases on a server engine
    #[serde(default)]
    pub admin_url: Option<String>,
    /// Candidate connection URLs probed in order; `{database}` is substituted
    #[serde(default = "default_candidate_urls")]
    #[validate(length(min = 1))]
    pub candidate_urls: Vec<String>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            on_startup: false,
            install_if_missing: false,
            engine: EngineKind::default(),
            service_names: default_service_names(),
            installer_path: None,
            detect_command: default_detect_command(),
            status_command: default_status_command(),
            running_marker: default_running_marker(),
            start_command: default_start_command(),
            install_settle_secs: default_install_settle_secs(),
            startup_timeout_secs: default_startup_timeout_secs(),
            poll_interval_millis: default_poll_interval_millis(),
            database_name: default_database_name(),
            data_dir: default_data_dir(),
            admin_url: None,
            candidate_urls: default_candidate_urls(),
        }
    }
}

/// Application configuration structure with validation
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Database connection URL
    #[validate(length(min = 1))]
    pub database_url: String,

    /// Application environment
    pub environment: String,

    /// Logging level
    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,

    /// Whether to run database migrations on startup
    #[serde(default = "default_true_bool")]
    pub auto_migrate: bool,

    /// DB pool: max connections
    #[serde(default = "default_db_max_connections")]
    #[validate(range(min = 1))]
    pub db_max_connections: u32,

    /// DB pool: min connections
    #[serde(default = "default_db_min_connections")]
    pub db_min_connections: u32,

    /// DB timeouts (seconds)
    #[serde(default = "default_db_connect_timeout_secs")]
    pub db_connect_timeout_secs: u64,

    #[serde(default = "default_db_idle_timeout_secs")]
    pub db_idle_timeout_secs: u64,

    #[serde(default = "default_db_acquire_timeout_secs")]
    pub db_acquire_timeout_secs: u64,

    /// Currency used when a document does not name one
    #[serde(default = "default_currency")]
    #[validate(custom = "validate_currency_code")]
    pub default_currency: String,

    /// KDV (VAT) rate applied to invoice lines, in percent
    #[serde(default = "default_kdv_orani")]
    #[validate(range(max = 100))]
    pub default_kdv_orani: u32,

    /// Bootstrap configuration
    #[serde(default)]
    #[validate]
    pub bootstrap: BootstrapConfig,
}

impl AppConfig {
    /// Creates a new configuration with defaults for everything but the URL and environment
    pub fn new(database_url: String, environment: String) -> Self {
        Self {
            database_url,
            environment,
            log_level: default_log_level(),
            log_json: false,
            auto_migrate: true,
            db_max_connections: default_db_max_connections(),
            db_min_connections: default_db_min_connections(),
            db_connect_timeout_secs: default_db_connect_timeout_secs(),
            db_idle_timeout_secs: default_db_idle_timeout_secs(),
            db_acquire_timeout_secs: default_db_acquire_timeout_secs(),
            default_currency: default_currency(),
            default_kdv_orani: default_kdv_orani(),
            bootstrap: BootstrapConfig::default(),
        }
    }

    /// Gets log level reference
    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Default value functions
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_true_bool() -> bool {
    true
}

fn default_db_max_connections() -> u32 {
    5
}

fn default_db_min_connections() -> u32 {
    1
}

fn default_db_connect_timeout_secs() -> u64 {
    30
}

fn default_db_idle_timeout_secs() -> u64 {
    600
}

fn default_db_acquire_timeout_secs() -> u64 {
    8
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_kdv_orani() -> u32 {
    DEFAULT_KDV_ORANI
}

fn default_service_names() -> Vec<String> {
    ["postgresql", "postgresql-x64-16", "postgresql-x64-15"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_detect_command() -> String {
    if cfg!(windows) {
        "sc query {service}".to_string()
    } else {
        "systemctl cat {service}".to_string()
    }
}

fn default_status_command() -> String {
    if cfg!(windows) {
        "sc query {service}".to_string()
    } else {
        "systemctl is-active {service}".to_string()
    }
}

fn default_running_marker() -> String {
    if cfg!(windows) {
        "RUNNING".to_string()
    } else {
        "active".to_string()
    }
}

fn default_start_command() -> String {
    if cfg!(windows) {
        "net start {service}".to_string()
    } else {
        "systemctl start {service}".to_string()
    }
}

fn default_install_settle_secs() -> u64 {
    DEFAULT_INSTALL_SETTLE_SECS
}

fn default_startup_timeout_secs() -> u64 {
    DEFAULT_STARTUP_TIMEOUT_SECS
}

fn default_poll_interval_millis() -> u64 {
    DEFAULT_POLL_INTERVAL_MILLIS
}

fn default_database_name() -> String {
    DEFAULT_DATABASE_NAME.to_string()
}

fn default_data_dir() -> String {
    ".".to_string()
}

fn default_candidate_urls() -> Vec<String> {
    vec!["sqlite://{database}?mode=rwc".to_string()]
}

/// Validates log level values
fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if valid_levels.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("log_level");
        err.message = Some("Must be one of: trace, debug, info, warn, error".into());
        Err(err)
    }
}

/// ISO 4217 style three letter upper-case code
pub fn validate_currency_code(code: &str) -> Result<(), ValidationError> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("currency_code");
        err.message = Some("Currency code must be three upper-case letters".into());
        Err(err)
    }
}

fn validate_database_name(name: &str) -> Result<(), ValidationError> {
    if name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Ok(())
    } else {
        let mut err = ValidationError::new("database_name");
        err.message = Some("Database name may only contain letters, digits and '_'".into());
        Err(err)
    }
}

/// Initializes tracing using the provided log level as the default filter
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::fmt;

    let default_directive = format!("ticari={},ticari_cli={},sea_orm=warn", level, level);
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    if json {
        let _ = fmt().with_env_filter(filter_directive).json().try_init();
    } else {
        let _ = fmt().with_env_filter(filter_directive).try_init();
    }
}

/// Loads configuration from the `config/` directory before the global subscriber is installed.
///
/// Loading and validation logs go to stderr through a scoped subscriber, filtered by
/// `RUST_LOG` or `ticari=info`.
pub fn load_config_logged() -> Result<AppConfig, AppConfigError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ticari=info"));
    load_config_logged_to(Path::new(CONFIG_DIR), filter, std::io::stderr)
}

fn load_config_logged_to<W>(dir: &Path, filter: EnvFilter, writer: W) -> Result<AppConfig, AppConfigError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, || load_config_from(dir))
}

/// Loads application configuration
///
/// Layers configuration sources in this order:
/// 1. Built-in defaults
/// 2. Default config (`{dir}/default.toml`)
/// 3. Environment-specific config (`{dir}/{env}.toml`)
/// 4. Environment variables (`TICARI__*`)
pub fn load_config_from(dir: &Path) -> Result<AppConfig, AppConfigError> {
    // Support both RUN_ENV and APP_ENV for selecting config profile
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());

    info!("Loading configuration for environment: {}", run_env);

    if !dir.exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            dir.display()
        );
    }

    let config = Config::builder()
        .set_default("database_url", DEFAULT_DATABASE_URL)?
        .set_default("environment", run_env.as_str())?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
        .add_source(File::with_name(&dir.join(&run_env).to_string_lossy()).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    info!("Configuration loaded successfully");
    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Environment variables are process global; serialize the tests touching them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn config_dir_with(filename: &str, content: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(filename), content).unwrap();
        temp_dir
    }

    #[test]
    fn defaults_apply_without_files() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp_dir = TempDir::new().unwrap();

        let config = load_config_from(&temp_dir.path().join("missing")).unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.default_currency, "TRY");
        assert_eq!(config.default_kdv_orani, 20);
        assert!(config.auto_migrate);
        assert_eq!(config.bootstrap.engine, EngineKind::Embedded);
        assert_eq!(config.bootstrap.startup_timeout_secs, 30);
        assert_eq!(config.bootstrap.database_name, "ticari");
    }

    #[test]
    fn file_values_override_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp_dir = config_dir_with(
            "default.toml",
            r#"
                database_url = "postgres://localhost/ticari"
                log_level = "debug"
                default_kdv_orani = 18

                [bootstrap]
                engine = "service"
                service_names = ["postgresql-x64-16"]
                startup_timeout_secs = 45
            "#,
        );

        let config = load_config_from(temp_dir.path()).unwrap();

        assert_eq!(config.database_url, "postgres://localhost/ticari");
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.default_kdv_orani, 18);
        assert_eq!(config.bootstrap.engine, EngineKind::Service);
        assert_eq!(config.bootstrap.service_names, vec!["postgresql-x64-16"]);
        assert_eq!(config.bootstrap.startup_timeout_secs, 45);
    }

    #[test]
    fn environment_overrides_files() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp_dir = config_dir_with("default.toml", r#"database_url = "sqlite://a.db""#);

        env::set_var("TICARI__DATABASE_URL", "sqlite://b.db");
        let result = load_config_from(temp_dir.path());
        env::remove_var("TICARI__DATABASE_URL");

        assert_eq!(result.unwrap().database_url, "sqlite://b.db");
    }

    #[test]
    fn invalid_values_fail_validation() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp_dir = config_dir_with(
            "default.toml",
            r#"
                log_level = "loud"
                default_currency = "lira"
                default_kdv_orani = 120
            "#,
        );

        let result = load_config_from(temp_dir.path());

        match result {
            Err(AppConfigError::Validation(errors)) => {
                let fields = errors.field_errors();
                assert!(fields.contains_key("log_level"));
                assert!(fields.contains_key("default_currency"));
                assert!(fields.contains_key("default_kdv_orani"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[derive(Clone, Default)]
    struct Yakalayici(std::sync::Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Yakalayici {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Yakalayici {
        fn metin(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn validation_failures_reach_the_startup_log() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp_dir = config_dir_with("default.toml", r#"log_level = "loud""#);
        let yakalayici = Yakalayici::default();
        let yazici = yakalayici.clone();

        let result = load_config_logged_to(
            temp_dir.path(),
            EnvFilter::new("ticari=info"),
            move || yazici.clone(),
        );

        assert!(matches!(result, Err(AppConfigError::Validation(_))));
        let log = yakalayici.metin();
        assert!(log.contains("Loading configuration"), "{}", log);
        assert!(log.contains("Configuration validation failed"), "{}", log);
    }

    #[test]
    fn currency_code_validation() {
        assert!(validate_currency_code("TRY").is_ok());
        assert!(validate_currency_code("EUR").is_ok());
        assert!(validate_currency_code("try").is_err());
        assert!(validate_currency_code("TL").is_err());
    }

    #[test]
    fn database_name_validation() {
        assert!(validate_database_name("ticari_db").is_ok());
        assert!(validate_database_name("ticari;drop").is_err());
    }
}
