//! PostgreSQL connection helpers
//!
//! The production store for the catalog. Schema changes are applied with
//! [`crate::run_migrations`] and the `migration` crate.

mod config;
mod connector;

pub use config::PostgresConfig;
pub use connector::{connect, connect_from_config};
