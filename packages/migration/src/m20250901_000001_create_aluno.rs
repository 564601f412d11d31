use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Aluno {
    Table,
    IdAluno,
    Ra,
    Nome,
    Sobrenome,
    Email,
    Senha,
    NomeArquivo,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Aluno::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Aluno::IdAluno)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Aluno::Ra).string_len(20).not_null())
                    .col(ColumnDef::new(Aluno::Nome).string_len(80).not_null())
                    .col(ColumnDef::new(Aluno::Sobrenome).string_len(80).not_null())
                    .col(ColumnDef::new(Aluno::Email).string_len(120).not_null())
                    // SHA-256 hex digest computed by the front end
                    .col(ColumnDef::new(Aluno::Senha).string_len(64).not_null())
                    .col(ColumnDef::new(Aluno::NomeArquivo).string_len(255).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_aluno_email")
                    .table(Aluno::Table)
                    .col(Aluno::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_aluno_ra")
                    .table(Aluno::Table)
                    .col(Aluno::Ra)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Aluno::Table).if_exists().to_owned())
            .await
    }
}
