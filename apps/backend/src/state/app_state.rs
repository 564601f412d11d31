use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::repos::alunos::CredentialStore;
use crate::services::auth::AuthService;

/// Application state shared by every worker.
#[derive(Clone)]
pub struct AppState {
    /// Pooled connection, absent when the store is a test double
    pub db: Option<DatabaseConnection>,
    pub security: SecurityConfig,
    pub alunos: Arc<dyn CredentialStore>,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(
        db: Option<DatabaseConnection>,
        alunos: Arc<dyn CredentialStore>,
        auth: AuthService,
    ) -> Self {
        Self {
            db,
            security: auth.security().clone(),
            alunos,
            auth,
        }
    }

    /// State over an arbitrary store with the default verifier and timeout.
    pub fn with_store(alunos: Arc<dyn CredentialStore>, security: SecurityConfig) -> Self {
        let auth = AuthService::new(alunos.clone(), security);
        Self::new(None, alunos, auth)
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
