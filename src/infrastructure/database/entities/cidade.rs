//! Cidade lookup entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cidades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub estado_id: i32,

    pub nome: String,

    /// IBGE municipality code
    #[sea_orm(nullable)]
    pub codigo: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::estado::Entity",
        from = "Column::EstadoId",
        to = "super::estado::Column::Id"
    )]
    Estado,

    #[sea_orm(has_many = "super::bairro::Entity")]
    Bairros,
}

impl Related<super::estado::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Estado.def()
    }
}

impl Related<super::bairro::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bairros.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
