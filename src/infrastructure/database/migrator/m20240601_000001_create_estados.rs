//! Create estados table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Estados::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Estados::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Estados::Nome).string().not_null())
                    .col(ColumnDef::new(Estados::Uf).string_len(2).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Estados::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Estados {
    Table,
    Id,
    Nome,
    Uf,
}
