//! Create imoveis table

use sea_orm_migration::prelude::*;

use super::m20240601_000003_create_bairros::Bairros;
use super::m20240601_000004_create_pessoas::Pessoas;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Imoveis::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Imoveis::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Imoveis::CodigoInterno)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Imoveis::Tipo).string().not_null())
                    .col(ColumnDef::new(Imoveis::Endereco).string().not_null())
                    .col(ColumnDef::new(Imoveis::BairroId).integer())
                    .col(ColumnDef::new(Imoveis::ProprietarioId).integer().not_null())
                    .col(
                        ColumnDef::new(Imoveis::Situacao)
                            .string_len(20)
                            .not_null()
                            .default("DISPONIVEL"),
                    )
                    .col(
                        ColumnDef::new(Imoveis::DisponivelAluguel)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Imoveis::ValorAluguelCentavos).big_integer())
                    .col(
                        ColumnDef::new(Imoveis::QtdQuartos)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Imoveis::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Imoveis::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_imoveis_bairro")
                            .from(Imoveis::Table, Imoveis::BairroId)
                            .to(Bairros::Table, Bairros::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_imoveis_proprietario")
                            .from(Imoveis::Table, Imoveis::ProprietarioId)
                            .to(Pessoas::Table, Pessoas::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_imoveis_situacao")
                    .table(Imoveis::Table)
                    .col(Imoveis::Situacao)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Imoveis::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Imoveis {
    Table,
    Id,
    CodigoInterno,
    Tipo,
    Endereco,
    BairroId,
    ProprietarioId,
    Situacao,
    DisponivelAluguel,
    ValorAluguelCentavos,
    QtdQuartos,
    CreatedAt,
    UpdatedAt,
}
