//! SeaORM adapter for the student credential store.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::entities::aluno;
use crate::repos::alunos::{AlunoCredential, CredentialStore, StoreError};

/// `CredentialStore` over the `aluno` table.
#[derive(Debug, Clone)]
pub struct SeaCredentialStore {
    conn: DatabaseConnection,
}

impl SeaCredentialStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl CredentialStore for SeaCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<AlunoCredential>, StoreError> {
        let row = aluno::Entity::find()
            .filter(aluno::Column::Email.eq(email))
            .one(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(AlunoCredential::from))
    }

    async fn find_by_ra(&self, ra: &str) -> Result<Option<AlunoCredential>, StoreError> {
        let row = aluno::Entity::find()
            .filter(aluno::Column::Ra.eq(ra))
            .one(&self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(AlunoCredential::from))
    }
}

fn map_db_err(e: DbErr) -> StoreError {
    match e {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => StoreError::Unavailable(e.to_string()),
        other => StoreError::Query(other.to_string()),
    }
}

impl From<aluno::Model> for AlunoCredential {
    fn from(model: aluno::Model) -> Self {
        Self {
            id: model.id_aluno,
            ra: model.ra,
            nome: model.nome,
            sobrenome: model.sobrenome,
            email: model.email,
            senha: model.senha,
            nome_arquivo: model.nome_arquivo,
        }
    }
}
