//! Credential store seam for student logins.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// A student row as needed for authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct AlunoCredential {
    pub id: i32,
    pub ra: String,
    pub nome: String,
    pub sobrenome: String,
    pub email: String,
    /// Stored secret, compared through `SecretVerifier` and never returned
    pub senha: String,
    pub nome_arquivo: Option<String>,
}

impl AlunoCredential {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.nome, self.sobrenome)
    }

    /// Redacted projection safe to send to the client.
    pub fn profile(&self) -> AlunoProfile {
        AlunoProfile {
            nome: self.display_name(),
            email: self.email.clone(),
            ra: self.ra.clone(),
            filename: self.nome_arquivo.clone(),
        }
    }
}

impl fmt::Debug for AlunoCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlunoCredential")
            .field("id", &self.id)
            .field("ra", &self.ra)
            .field("nome", &self.nome)
            .field("sobrenome", &self.sobrenome)
            .field("email", &self.email)
            .field("senha", &"***")
            .field("nome_arquivo", &self.nome_arquivo)
            .finish()
    }
}

/// Public view of a student: `{nome, email, ra, filename}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlunoProfile {
    pub nome: String,
    pub email: String,
    pub ra: String,
    pub filename: Option<String>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("credential store unavailable: {0}")]
    Unavailable(String),
    #[error("credential store query failed: {0}")]
    Query(String),
}

/// Read-only access to student credentials.
///
/// Implementations must be safe for unlimited concurrent readers.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up the single student registered under `email`.
    async fn find_by_email(&self, email: &str) -> Result<Option<AlunoCredential>, StoreError>;

    async fn find_by_ra(&self, ra: &str) -> Result<Option<AlunoCredential>, StoreError>;
}
