//! Create contas_bancarias table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContasBancarias::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContasBancarias::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ContasBancarias::BancoCodigo)
                            .string_len(5)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContasBancarias::BancoNome).string().not_null())
                    .col(
                        ColumnDef::new(ContasBancarias::Agencia)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContasBancarias::Codigo)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContasBancarias::Digito).string_len(2))
                    .col(ColumnDef::new(ContasBancarias::Titular).string().not_null())
                    .col(
                        ColumnDef::new(ContasBancarias::Principal)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ContasBancarias::Ativo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(ContasBancarias::Descricao).string())
                    .col(
                        ColumnDef::new(ContasBancarias::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContasBancarias::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ContasBancarias {
    Table,
    Id,
    BancoCodigo,
    BancoNome,
    Agencia,
    Codigo,
    Digito,
    Titular,
    Principal,
    Ativo,
    Descricao,
    CreatedAt,
}
