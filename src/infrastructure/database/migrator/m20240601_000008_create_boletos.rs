//! Create boletos table

use sea_orm_migration::prelude::*;

use super::m20240601_000004_create_pessoas::Pessoas;
use super::m20240601_000007_create_contratos::Contratos;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Boletos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Boletos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Boletos::ContratoId).integer().not_null())
                    .col(ColumnDef::new(Boletos::PagadorId).integer().not_null())
                    .col(
                        ColumnDef::new(Boletos::NossoNumero)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Boletos::SeuNumero).string_len(15))
                    .col(
                        ColumnDef::new(Boletos::ValorNominalCentavos)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Boletos::DataEmissao).date().not_null())
                    .col(ColumnDef::new(Boletos::DataVencimento).date().not_null())
                    .col(ColumnDef::new(Boletos::DataPagamento).date())
                    .col(ColumnDef::new(Boletos::ValorPagoCentavos).big_integer())
                    .col(
                        ColumnDef::new(Boletos::Status)
                            .string_len(20)
                            .not_null()
                            .default("PENDENTE"),
                    )
                    .col(ColumnDef::new(Boletos::LinhaDigitavel).string_len(60))
                    .col(
                        ColumnDef::new(Boletos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Boletos::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_boletos_contrato")
                            .from(Boletos::Table, Boletos::ContratoId)
                            .to(Contratos::Table, Contratos::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_boletos_pagador")
                            .from(Boletos::Table, Boletos::PagadorId)
                            .to(Pessoas::Table, Pessoas::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing filters hit status and due date on every page load
        manager
            .create_index(
                Index::create()
                    .name("idx_boletos_status")
                    .table(Boletos::Table)
                    .col(Boletos::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_boletos_vencimento")
                    .table(Boletos::Table)
                    .col(Boletos::DataVencimento)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Boletos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Boletos {
    Table,
    Id,
    ContratoId,
    PagadorId,
    NossoNumero,
    SeuNumero,
    ValorNominalCentavos,
    DataEmissao,
    DataVencimento,
    DataPagamento,
    ValorPagoCentavos,
    Status,
    LinhaDigitavel,
    CreatedAt,
    UpdatedAt,
}
