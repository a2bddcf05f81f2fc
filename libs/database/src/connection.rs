use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::common::{DatabaseError, DatabaseResult};

/// Connect with caller-provided pool options.
///
/// The backend is picked from the URL scheme, so the same call serves
/// PostgreSQL and SQLite.
pub async fn connect_with_options(options: ConnectOptions) -> DatabaseResult<DatabaseConnection> {
    let db = Database::connect(options)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!(backend = ?db.get_database_backend(), "Connected to database");
    Ok(db)
}

/// Apply every pending migration of `M`
///
/// # Example
/// ```ignore
/// use migration::Migrator;
///
/// database::run_migrations::<Migrator>(&db, "catalog").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> DatabaseResult<()> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!(app = app_name, "Migrations complete");
    Ok(())
}
