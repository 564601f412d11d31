use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbOwner, RuntimeEnv};
use crate::error::DbInfraError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_INTERVAL_MS: u64 = 500;

async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, DbInfraError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DbInfraError>>,
{
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(
                        "connection_retry=success attempts={} interval_ms={}",
                        attempt, interval_ms
                    );
                }
                return Ok(result);
            }
            Err(e) => {
                last_error = Some(e);
                if attempt < max_attempts {
                    warn!(
                        "connection_retry=failed attempt={} max_attempts={} interval_ms={}",
                        attempt, max_attempts, interval_ms
                    );
                    tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| DbInfraError::Connect {
        message: "no error recorded after max attempts".to_string(),
    }))
}

/// Open a pooled connection for the given environment and role.
///
/// Postgres may still be starting when the backend container comes up, so the
/// first connection is retried a few times before giving up.
pub async fn connect(env: RuntimeEnv, owner: DbOwner) -> Result<DatabaseConnection, DbInfraError> {
    let url = db_url(env, owner)?;

    let mut opt = ConnectOptions::new(&url);
    opt.min_connections(1)
        .max_connections(match owner {
            DbOwner::App => 10,
            DbOwner::Owner => 1,
        })
        .acquire_timeout(Duration::from_secs(2))
        .sqlx_logging(false);

    info!(env = ?env, owner = ?owner, url = %sanitize_db_url(&url), "db_connect=start");

    retry_connection(
        || {
            let opt = opt.clone();
            async move {
                Database::connect(opt)
                    .await
                    .map_err(|e| DbInfraError::Connect {
                        message: format!("failed to connect to Postgres: {e}"),
                    })
            }
        },
        CONNECT_ATTEMPTS,
        CONNECT_INTERVAL_MS,
    )
    .await
}

/// Connect with the owner role and run a migration command.
pub async fn orchestrate_migration(
    env: RuntimeEnv,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    let pool = connect(env, DbOwner::Owner).await?;

    info!("migrate=start env={:?} command={:?}", env, command);
    migrate(&pool, command)
        .await
        .map_err(|e| DbInfraError::Migration {
            message: format!("migration execution failed: {e}"),
        })?;
    info!("migrate=done");

    Ok(())
}

/// Mask the password in a connection string so it can be logged.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth_part, host_part)) = url.rsplit_once('@') else {
        return url.to_string();
    };

    match auth_part.rfind(':') {
        Some(colon_pos) if colon_pos > auth_part.find("://").map_or(0, |p| p + 2) => {
            format!("{}:***@{}", &auth_part[..colon_pos], host_part)
        }
        _ => url.to_string(),
    }
}
