//! Configuration for the catalog CLI

use core_config::{ConfigError, Environment, FromEnv, JwtConfig};
use database::postgres::PostgresConfig;
use eyre::Result;
use sea_orm::DatabaseConnection;

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    /// Pool settings; a `sqlite:` URL selects the SQLite backend instead
    pub database: PostgresConfig,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            database: PostgresConfig::from_env()?,
        })
    }
}

impl Config {
    /// Signing settings, only needed by the token commands.
    pub fn jwt(&self) -> Result<JwtConfig> {
        Ok(JwtConfig::from_env()?)
    }

    pub fn is_sqlite(&self) -> bool {
        self.database.url().starts_with("sqlite:")
    }

    pub async fn connect(&self) -> Result<DatabaseConnection> {
        let db = if self.is_sqlite() {
            database::sqlite::connect(self.database.url()).await
        } else {
            database::postgres::connect_from_config(self.database.clone()).await
        };

        db.map_err(|e| eyre::eyre!("Database connection failed: {}", e))
    }
}
