//! Create cidades table

use sea_orm_migration::prelude::*;

use super::m20240601_000001_create_estados::Estados;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cidades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cidades::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cidades::EstadoId).integer().not_null())
                    .col(ColumnDef::new(Cidades::Nome).string().not_null())
                    .col(ColumnDef::new(Cidades::Codigo).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cidades_estado")
                            .from(Cidades::Table, Cidades::EstadoId)
                            .to(Estados::Table, Estados::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cidades_estado")
                    .table(Cidades::Table)
                    .col(Cidades::EstadoId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cidades::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Cidades {
    Table,
    Id,
    EstadoId,
    Nome,
    Codigo,
}
