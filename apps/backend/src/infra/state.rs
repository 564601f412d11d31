use std::sync::Arc;
use std::time::Duration;

use db_infra::config::db::RuntimeEnv;

use crate::adapters::SeaCredentialStore;
use crate::auth::secret::SecretVerifier;
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::repos::alunos::CredentialStore;
use crate::services::auth::{AuthService, DEFAULT_STORE_TIMEOUT};
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security: Option<SecurityConfig>,
    db_env: Option<RuntimeEnv>,
    store: Option<Arc<dyn CredentialStore>>,
    verifier: Option<Arc<dyn SecretVerifier>>,
    store_timeout: Duration,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security: None,
            db_env: None,
            store: None,
            verifier: None,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = Some(security);
        self
    }

    /// Connect to Postgres for `env` and back the store with it.
    pub fn with_db(mut self, env: RuntimeEnv) -> Self {
        self.db_env = Some(env);
        self
    }

    /// Use `store` instead of the database-backed one.
    pub fn with_store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_verifier(mut self, verifier: Arc<dyn SecretVerifier>) -> Self {
        self.verifier = Some(verifier);
        self
    }

    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let security = self
            .security
            .ok_or_else(|| AppError::config("security config is required"))?;

        let db = match self.db_env {
            Some(env) => Some(connect_db(env).await?),
            None => None,
        };

        let store: Arc<dyn CredentialStore> = match (self.store, &db) {
            (Some(store), _) => store,
            (None, Some(conn)) => Arc::new(SeaCredentialStore::new(conn.clone())),
            (None, None) => {
                return Err(AppError::config(
                    "a credential store or database is required",
                ))
            }
        };

        let mut auth =
            AuthService::new(store.clone(), security).with_store_timeout(self.store_timeout);
        if let Some(verifier) = self.verifier {
            auth = auth.with_verifier(verifier);
        }

        Ok(AppState::new(db, store, auth))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
