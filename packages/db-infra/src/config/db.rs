use std::env;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::error::DbInfraError;

/// Which database a process talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    /// Production database (`PROD_DB`)
    Prod,
    /// Test database (`TEST_DB`); name must end with `_test`
    Test,
}

/// Database role used for the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application role, read access to `aluno` is all the backend needs
    App,
    /// Owner role, used by migrations
    Owner,
}

/// Builds a Postgres URL from environment variables for the given env and owner.
pub fn db_url(env: RuntimeEnv, owner: DbOwner) -> Result<String, DbInfraError> {
    let host = host();
    let port = port();
    let db_name = db_name(env)?;
    let (username, password) = credentials(owner)?;

    let password = utf8_percent_encode(&password, NON_ALPHANUMERIC);
    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

fn host() -> String {
    env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string())
}

fn port() -> String {
    env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string())
}

fn db_name(env: RuntimeEnv) -> Result<String, DbInfraError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var("TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(DbInfraError::Config {
                    message: format!(
                        "Test env requires database name to end with '_test', but got: '{db_name}'"
                    ),
                });
            }
            Ok(db_name)
        }
    }
}

fn credentials(owner: DbOwner) -> Result<(String, String), DbInfraError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("BIBLIOTECA_OWNER_USER")?,
            must_var("BIBLIOTECA_OWNER_PASSWORD")?,
        )),
    }
}

fn must_var(name: &str) -> Result<String, DbInfraError> {
    env::var(name).map_err(|_| DbInfraError::Config {
        message: format!("Required environment variable '{name}' is not set"),
    })
}
