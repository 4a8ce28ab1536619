//! Contrato de locação entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contratos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub codigo: String,

    pub imovel_id: i32,
    pub locador_id: i32,
    pub locatario_id: i32,

    #[sea_orm(nullable)]
    pub fiador_id: Option<i32>,

    pub data_inicio: Date,

    #[sea_orm(nullable)]
    pub data_fim: Option<Date>,

    /// Monthly rent in centavos
    pub valor_aluguel_centavos: i64,

    /// Day of the month each cobrança falls due
    pub dia_vencimento: i32,

    /// ATIVO, SUSPENSO, ENCERRADO
    pub status: String,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::imovel::Entity",
        from = "Column::ImovelId",
        to = "super::imovel::Column::Id"
    )]
    Imovel,

    #[sea_orm(
        belongs_to = "super::pessoa::Entity",
        from = "Column::LocatarioId",
        to = "super::pessoa::Column::Id"
    )]
    Locatario,

    #[sea_orm(has_many = "super::boleto::Entity")]
    Boletos,
}

impl Related<super::imovel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Imovel.def()
    }
}

impl Related<super::boleto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Boletos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
