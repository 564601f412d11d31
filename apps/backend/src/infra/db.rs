use db_infra::config::db::{DbOwner, RuntimeEnv};
use sea_orm::DatabaseConnection;

use crate::error::AppError;

/// Open the application pool for `env`. Migrations are run separately by
/// `migration-cli`; the app role only reads.
pub async fn connect_db(env: RuntimeEnv) -> Result<DatabaseConnection, AppError> {
    Ok(db_infra::connect(env, DbOwner::App).await?)
}
