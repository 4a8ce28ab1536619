//! Create contratos table

use sea_orm_migration::prelude::*;

use super::m20240601_000004_create_pessoas::Pessoas;
use super::m20240601_000006_create_imoveis::Imoveis;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contratos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contratos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Contratos::Codigo)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Contratos::ImovelId).integer().not_null())
                    .col(ColumnDef::new(Contratos::LocadorId).integer().not_null())
                    .col(ColumnDef::new(Contratos::LocatarioId).integer().not_null())
                    .col(ColumnDef::new(Contratos::FiadorId).integer())
                    .col(ColumnDef::new(Contratos::DataInicio).date().not_null())
                    .col(ColumnDef::new(Contratos::DataFim).date())
                    .col(
                        ColumnDef::new(Contratos::ValorAluguelCentavos)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Contratos::DiaVencimento)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Contratos::Status)
                            .string_len(20)
                            .not_null()
                            .default("ATIVO"),
                    )
                    .col(
                        ColumnDef::new(Contratos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Contratos::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contratos_imovel")
                            .from(Contratos::Table, Contratos::ImovelId)
                            .to(Imoveis::Table, Imoveis::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contratos_locador")
                            .from(Contratos::Table, Contratos::LocadorId)
                            .to(Pessoas::Table, Pessoas::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contratos_locatario")
                            .from(Contratos::Table, Contratos::LocatarioId)
                            .to(Pessoas::Table, Pessoas::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contratos_status")
                    .table(Contratos::Table)
                    .col(Contratos::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contratos_imovel")
                    .table(Contratos::Table)
                    .col(Contratos::ImovelId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contratos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Contratos {
    Table,
    Id,
    Codigo,
    ImovelId,
    LocadorId,
    LocatarioId,
    FiadorId,
    DataInicio,
    DataFim,
    ValorAluguelCentavos,
    DiaVencimento,
    Status,
    CreatedAt,
    UpdatedAt,
}
