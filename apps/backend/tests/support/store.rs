//! Credential-store doubles.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use backend::repos::alunos::{AlunoCredential, CredentialStore, StoreError};
use parking_lot::RwLock;

/// SHA-256 of "password", as the front end would send it.
pub const ANA_DIGEST: &str = "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";

pub fn ana() -> AlunoCredential {
    AlunoCredential {
        id: 1,
        ra: "2024001".to_string(),
        nome: "Ana".to_string(),
        sobrenome: "Souza".to_string(),
        email: "ana@escola.edu.br".to_string(),
        senha: ANA_DIGEST.to_string(),
        nome_arquivo: Some("1700000000000-42.png".to_string()),
    }
}

/// In-memory `aluno` table keyed by email.
#[derive(Default)]
pub struct InMemoryAlunos {
    rows: RwLock<HashMap<String, AlunoCredential>>,
    lookups: AtomicUsize,
}

impl InMemoryAlunos {
    pub fn seeded(rows: impl IntoIterator<Item = AlunoCredential>) -> Self {
        let store = Self::default();
        for row in rows {
            store.insert(row);
        }
        store
    }

    pub fn insert(&self, row: AlunoCredential) {
        self.rows.write().insert(row.email.clone(), row);
    }

    pub fn remove_by_ra(&self, ra: &str) {
        self.rows.write().retain(|_, row| row.ra != ra);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CredentialStore for InMemoryAlunos {
    async fn find_by_email(&self, email: &str) -> Result<Option<AlunoCredential>, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.read().get(email).cloned())
    }

    async fn find_by_ra(&self, ra: &str) -> Result<Option<AlunoCredential>, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.read().values().find(|row| row.ra == ra).cloned())
    }
}

/// Store whose every call fails as if Postgres were down.
pub struct FailingStore;

#[async_trait]
impl CredentialStore for FailingStore {
    async fn find_by_email(&self, _: &str) -> Result<Option<AlunoCredential>, StoreError> {
        Err(StoreError::Unavailable("pool timed out while waiting for an open connection".into()))
    }

    async fn find_by_ra(&self, _: &str) -> Result<Option<AlunoCredential>, StoreError> {
        Err(StoreError::Query("relation \"aluno\" does not exist".into()))
    }
}

/// Store that answers only after `delay`.
pub struct SlowStore {
    pub delay: Duration,
}

#[async_trait]
impl CredentialStore for SlowStore {
    async fn find_by_email(&self, _: &str) -> Result<Option<AlunoCredential>, StoreError> {
        tokio::time::sleep(self.delay).await;
        Ok(Some(ana()))
    }

    async fn find_by_ra(&self, _: &str) -> Result<Option<AlunoCredential>, StoreError> {
        tokio::time::sleep(self.delay).await;
        Ok(Some(ana()))
    }
}
