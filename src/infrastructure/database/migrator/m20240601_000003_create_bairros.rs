//! Create bairros table

use sea_orm_migration::prelude::*;

use super::m20240601_000002_create_cidades::Cidades;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bairros::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bairros::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bairros::CidadeId).integer().not_null())
                    .col(ColumnDef::new(Bairros::Nome).string().not_null())
                    .col(ColumnDef::new(Bairros::Codigo).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bairros_cidade")
                            .from(Bairros::Table, Bairros::CidadeId)
                            .to(Cidades::Table, Cidades::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bairros_cidade")
                    .table(Bairros::Table)
                    .col(Bairros::CidadeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bairros::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Bairros {
    Table,
    Id,
    CidadeId,
    Nome,
    Codigo,
}
