use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aluno")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_aluno: i32,
    #[sea_orm(unique)]
    pub ra: String,
    pub nome: String,
    pub sobrenome: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Client-side SHA-256 digest of the password
    pub senha: String,
    pub nome_arquivo: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
