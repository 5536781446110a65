//! Ticari Library
//!
//! Trade management core for small businesses: parties and their running
//! balances, product stock, invoices, cash/bank accounts, checks and notes,
//! quotes and orders, exchange rates and waste records.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod bootstrap;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod migrator;
pub mod repositories;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::ServiceError;
use crate::services::factory::{ServiceContainer, ServiceFactory};

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbPool>,
    pub config: Arc<AppConfig>,
    pub services: ServiceContainer,
}

impl AppState {
    /// Connects with the configured pool settings, applies migrations when
    /// `auto_migrate` is set and wires every service.
    pub async fn init(config: AppConfig) -> Result<Self, ServiceError> {
        let pool = db::establish_connection_from_app_config(&config).await?;
        if config.auto_migrate {
            db::run_migrations(&pool).await?;
        }
        Ok(Self::from_pool(Arc::new(pool), Arc::new(config)))
    }

    /// Startup entry point. With `bootstrap.on_startup` set, the bootstrap sequence runs
    /// first and the pool is opened on the connection URL it found; a failed bootstrap
    /// aborts startup.
    pub async fn start(mut config: AppConfig) -> Result<Self, ServiceError> {
        if config.bootstrap.on_startup {
            let result =
                bootstrap::run_configured(&config.bootstrap, config.bootstrap.install_if_missing)
                    .await;
            match result.connection_url {
                Some(url) if result.success => {
                    info!(url = %url, "Using bootstrapped database");
                    config.database_url = url;
                }
                _ => {
                    return Err(ServiceError::BootstrapError(
                        result
                            .error_message
                            .unwrap_or_else(|| "bootstrap did not produce a connection URL".into()),
                    ))
                }
            }
        }
        Self::init(config).await
    }

    pub fn from_pool(db: Arc<DbPool>, config: Arc<AppConfig>) -> Self {
        let factory = ServiceFactory::with_config(db.clone(), config.clone());
        let services = ServiceContainer::new(&factory);
        info!(environment = %config.environment, "Application state ready");
        Self {
            db,
            config,
            services,
        }
    }
}
