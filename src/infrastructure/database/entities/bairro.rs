//! Bairro lookup entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bairros")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub cidade_id: i32,

    pub nome: String,

    #[sea_orm(nullable)]
    pub codigo: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cidade::Entity",
        from = "Column::CidadeId",
        to = "super::cidade::Column::Id"
    )]
    Cidade,
}

impl Related<super::cidade::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cidade.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
