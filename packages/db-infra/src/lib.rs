//! Shared database configuration and migration infrastructure.
//! Used by the backend and the migration CLI.

pub mod config;
pub mod connect;
pub mod error;

pub use config::db;
pub use connect::{connect, orchestrate_migration, sanitize_db_url};
pub use error::DbInfraError;
