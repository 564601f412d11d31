//! Login: credential check against the store and access-token issuance.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use serde::Serialize;
use tracing::debug;

use crate::auth::jwt::mint_access_token;
use crate::auth::secret::{DigestEquality, SecretVerifier};
use crate::error::AppError;
use crate::logging::security::{self, LoginFailure};
use crate::repos::alunos::{AlunoProfile, CredentialStore};
use crate::state::security_config::SecurityConfig;

/// Upper bound on a single credential-store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Token and public identity returned by a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginSuccess {
    pub token: String,
    pub aluno: AlunoProfile,
}

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    verifier: Arc<dyn SecretVerifier>,
    security: SecurityConfig,
    store_timeout: Duration,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>, security: SecurityConfig) -> Self {
        Self {
            store,
            verifier: Arc::new(DigestEquality),
            security,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_verifier(mut self, verifier: Arc<dyn SecretVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    pub fn security(&self) -> &SecurityConfig {
        &self.security
    }

    pub fn store_timeout(&self) -> Duration {
        self.store_timeout
    }

    pub async fn authenticate(&self, email: &str, senha: &str) -> Result<LoginSuccess, AppError> {
        self.authenticate_at(email, senha, SystemTime::now()).await
    }

    /// Check `email`/`senha` and mint a token issued at `now`.
    ///
    /// Unknown email and wrong secret both yield `InvalidCredentials`; store
    /// failures and timeouts are internal errors.
    pub async fn authenticate_at(
        &self,
        email: &str,
        senha: &str,
        now: SystemTime,
    ) -> Result<LoginSuccess, AppError> {
        let lookup = tokio::time::timeout(self.store_timeout, self.store.find_by_email(email))
            .await
            .map_err(|_| {
                AppError::internal(format!(
                    "credential lookup exceeded {} ms",
                    self.store_timeout.as_millis()
                ))
            })??;

        let Some(aluno) = lookup else {
            security::login_failed(LoginFailure::UnknownEmail, email);
            return Err(AppError::InvalidCredentials);
        };

        if !self.verifier.verify(senha, &aluno.senha) {
            security::login_failed(LoginFailure::SecretMismatch, email);
            return Err(AppError::InvalidCredentials);
        }

        let token = mint_access_token(
            &aluno.ra,
            &aluno.display_name(),
            &aluno.email,
            now,
            &self.security,
        )?;

        security::login_succeeded(&aluno.ra, &aluno.email);
        debug!(ra = %aluno.ra, "access token minted");

        Ok(LoginSuccess {
            token,
            aluno: aluno.profile(),
        })
    }
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService")
            .field("verifier", &self.verifier)
            .field("security", &self.security)
            .field("store_timeout", &self.store_timeout)
            .finish_non_exhaustive()
    }
}
