//! SQLite connection helpers
//!
//! Used for single-node local runs (`sqlite://catalog.db?mode=rwc`) and for
//! integration tests against an in-memory database.

use sea_orm::{ConnectOptions, DatabaseConnection};

use crate::common::DatabaseResult;
use crate::connection::connect_with_options;

/// Connect to a SQLite database file or URL
pub async fn connect(database_url: &str) -> DatabaseResult<DatabaseConnection> {
    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);
    connect_with_options(opt).await
}

/// Open a private in-memory database.
///
/// Every SQLite connection to `:memory:` sees its own database, so the pool is
/// pinned to a single connection that is never recycled.
pub async fn connect_in_memory() -> DatabaseResult<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    connect_with_options(opt).await
}
