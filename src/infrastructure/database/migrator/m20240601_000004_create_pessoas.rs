//! Create pessoas table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pessoas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pessoas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pessoas::Nome).string().not_null())
                    .col(
                        ColumnDef::new(Pessoas::Documento)
                            .string_len(14)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Pessoas::FisicaJuridica)
                            .string_len(1)
                            .not_null()
                            .default("F"),
                    )
                    .col(ColumnDef::new(Pessoas::Email).string())
                    .col(ColumnDef::new(Pessoas::Telefone).string())
                    .col(
                        ColumnDef::new(Pessoas::Locador)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Pessoas::Locatario)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Pessoas::Fiador)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Pessoas::Ativo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Pessoas::Observacoes).text())
                    .col(
                        ColumnDef::new(Pessoas::DtCadastro)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing pages search by name constantly
        manager
            .create_index(
                Index::create()
                    .name("idx_pessoas_nome")
                    .table(Pessoas::Table)
                    .col(Pessoas::Nome)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pessoas::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Pessoas {
    Table,
    Id,
    Nome,
    Documento,
    FisicaJuridica,
    Email,
    Telefone,
    Locador,
    Locatario,
    Fiador,
    Ativo,
    Observacoes,
    DtCadastro,
}
