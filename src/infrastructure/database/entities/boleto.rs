//! Boleto entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "boletos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub contrato_id: i32,

    /// Pessoa charged by the slip
    pub pagador_id: i32,

    /// Bank-side identifier
    #[sea_orm(unique)]
    pub nosso_numero: String,

    #[sea_orm(nullable)]
    pub seu_numero: Option<String>,

    /// Face value in centavos
    pub valor_nominal_centavos: i64,

    pub data_emissao: Date,
    pub data_vencimento: Date,

    #[sea_orm(nullable)]
    pub data_pagamento: Option<Date>,

    /// Settled amount in centavos
    #[sea_orm(nullable)]
    pub valor_pago_centavos: Option<i64>,

    /// PENDENTE, REGISTRADO, PAGO, VENCIDO, BAIXADO, PROTESTADO, ERRO
    pub status: String,

    #[sea_orm(nullable)]
    pub linha_digitavel: Option<String>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contrato::Entity",
        from = "Column::ContratoId",
        to = "super::contrato::Column::Id"
    )]
    Contrato,

    #[sea_orm(
        belongs_to = "super::pessoa::Entity",
        from = "Column::PagadorId",
        to = "super::pessoa::Column::Id"
    )]
    Pagador,
}

impl Related<super::contrato::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contrato.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
