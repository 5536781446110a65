use async_trait::async_trait;
use sea_orm::{ConnectionTrait, Database, DbBackend, Statement};
use std::path::PathBuf;
use tracing::{debug, info};

use super::DatabaseProvisioner;
use crate::db;
use crate::errors::ServiceError;

async fn ping(url: &str) -> bool {
    match Database::connect(url).await {
        Ok(conn) => {
            let ok = db::check_connection(&conn).await.is_ok();
            let _ = conn.close().await;
            ok
        }
        Err(e) => {
            debug!(url, error = %e, "Candidate connection failed");
            false
        }
    }
}

/// Databases are SQLite files under a data directory.
#[derive(Debug, Clone)]
pub struct SqliteProvisioner {
    data_dir: PathBuf,
}

impl SqliteProvisioner {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn database_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.db", name))
    }
}

#[async_trait]
impl DatabaseProvisioner for SqliteProvisioner {
    fn database_ref(&self, name: &str) -> String {
        self.database_path(name).to_string_lossy().into_owned()
    }

    async fn ensure_database(&self, name: &str) -> Result<bool, ServiceError> {
        let path = self.database_path(name);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            debug!(path = %path.display(), "Database file already exists");
            return Ok(false);
        }

        tokio::fs::create_dir_all(&self.data_dir).await.map_err(|e| {
            ServiceError::BootstrapError(format!(
                "Cannot create data directory {}: {}",
                self.data_dir.display(),
                e
            ))
        })?;
        tokio::fs::File::create(&path).await.map_err(|e| {
            ServiceError::BootstrapError(format!("Cannot create {}: {}", path.display(), e))
        })?;

        info!(path = %path.display(), "Database file created");
        Ok(true)
    }

    async fn probe(&self, url: &str) -> bool {
        ping(url).await
    }
}

/// Creates databases on a PostgreSQL server through a maintenance connection.
#[derive(Debug, Clone)]
pub struct PostgresProvisioner {
    admin_url: String,
}

impl PostgresProvisioner {
    pub fn new(admin_url: impl Into<String>) -> Self {
        Self {
            admin_url: admin_url.into(),
        }
    }
}

#[async_trait]
impl DatabaseProvisioner for PostgresProvisioner {
    fn database_ref(&self, name: &str) -> String {
        name.to_string()
    }

    async fn ensure_database(&self, name: &str) -> Result<bool, ServiceError> {
        let admin = Database::connect(self.admin_url.as_str())
            .await
            .map_err(ServiceError::db_error)?;

        let exists = admin
            .query_one(Statement::from_sql_and_values(
                DbBackend::Postgres,
                "SELECT 1 FROM pg_database WHERE datname = $1",
                [name.into()],
            ))
            .await
            .map_err(ServiceError::db_error)?
            .is_some();

        if !exists {
            // The name is restricted to [A-Za-z0-9_] by config validation.
            admin
                .execute(Statement::from_string(
                    DbBackend::Postgres,
                    format!("CREATE DATABASE \"{}\"", name),
                ))
                .await
                .map_err(ServiceError::db_error)?;
            info!(database = name, "Database created");
        }

        let _ = admin.close().await;
        Ok(!exists)
    }

    async fn probe(&self, url: &str) -> bool {
        ping(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_sqlite_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let provisioner = SqliteProvisioner::new(dir.path().join("data"));

        assert!(provisioner.ensure_database("ticari").await.unwrap());
        assert!(provisioner.database_path("ticari").exists());
        assert!(!provisioner.ensure_database("ticari").await.unwrap());
    }

    #[tokio::test]
    async fn probes_created_sqlite_database() {
        let dir = tempfile::tempdir().unwrap();
        let provisioner = SqliteProvisioner::new(dir.path());
        provisioner.ensure_database("ticari").await.unwrap();

        let url = format!("sqlite://{}?mode=rwc", provisioner.database_ref("ticari"));
        assert!(provisioner.probe(&url).await);
    }
}
