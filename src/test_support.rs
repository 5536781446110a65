use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::db;

/// Fresh in-memory SQLite database with the schema applied.
///
/// Every pooled connection to `sqlite::memory:` opens its own database, so the
/// pool is pinned to a single connection.
pub async fn bellek_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let conn = Database::connect(opt).await.expect("in-memory sqlite");
    db::run_migrations(&conn).await.expect("migrations");
    conn
}
