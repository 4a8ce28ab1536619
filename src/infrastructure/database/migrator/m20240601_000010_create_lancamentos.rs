//! Create lancamentos table

use sea_orm_migration::prelude::*;

use super::m20240601_000006_create_imoveis::Imoveis;
use super::m20240601_000009_create_contas_bancarias::ContasBancarias;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lancamentos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lancamentos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Lancamentos::ContaBancariaId).integer())
                    .col(ColumnDef::new(Lancamentos::ImovelId).integer())
                    .col(ColumnDef::new(Lancamentos::Historico).string().not_null())
                    .col(ColumnDef::new(Lancamentos::NumeroDocumento).string_len(30))
                    .col(
                        ColumnDef::new(Lancamentos::Competencia)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Lancamentos::DataVencimento).date().not_null())
                    .col(
                        ColumnDef::new(Lancamentos::ValorCentavos)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Lancamentos::Tipo)
                            .string_len(1)
                            .not_null()
                            .default("C"),
                    )
                    .col(
                        ColumnDef::new(Lancamentos::Status)
                            .string_len(20)
                            .not_null()
                            .default("PENDENTE"),
                    )
                    .col(
                        ColumnDef::new(Lancamentos::Conciliado)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Lancamentos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Lancamentos::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lancamentos_conta")
                            .from(Lancamentos::Table, Lancamentos::ContaBancariaId)
                            .to(ContasBancarias::Table, ContasBancarias::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lancamentos_imovel")
                            .from(Lancamentos::Table, Lancamentos::ImovelId)
                            .to(Imoveis::Table, Imoveis::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lancamentos_vencimento")
                    .table(Lancamentos::Table)
                    .col(Lancamentos::DataVencimento)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lancamentos_competencia")
                    .table(Lancamentos::Table)
                    .col(Lancamentos::Competencia)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lancamentos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Lancamentos {
    Table,
    Id,
    ContaBancariaId,
    ImovelId,
    Historico,
    NumeroDocumento,
    Competencia,
    DataVencimento,
    ValorCentavos,
    Tipo,
    Status,
    Conciliado,
    CreatedAt,
    UpdatedAt,
}
