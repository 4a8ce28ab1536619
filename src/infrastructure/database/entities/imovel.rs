//! Imóvel entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "imoveis")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Internal reference code (unique, shown on listings and contracts)
    #[sea_orm(unique)]
    pub codigo_interno: String,

    /// Property kind (casa, apartamento, sala comercial, ...)
    pub tipo: String,

    pub endereco: String,

    #[sea_orm(nullable)]
    pub bairro_id: Option<i32>,

    pub proprietario_id: i32,

    /// DISPONIVEL, ALUGADO, RESERVADO, INDISPONIVEL
    pub situacao: String,

    pub disponivel_aluguel: bool,

    /// Asking rent in centavos
    #[sea_orm(nullable)]
    pub valor_aluguel_centavos: Option<i64>,

    pub qtd_quartos: i32,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pessoa::Entity",
        from = "Column::ProprietarioId",
        to = "super::pessoa::Column::Id"
    )]
    Proprietario,

    #[sea_orm(
        belongs_to = "super::bairro::Entity",
        from = "Column::BairroId",
        to = "super::bairro::Column::Id"
    )]
    Bairro,

    #[sea_orm(has_many = "super::contrato::Entity")]
    Contratos,
}

impl Related<super::pessoa::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Proprietario.def()
    }
}

impl Related<super::contrato::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contratos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
