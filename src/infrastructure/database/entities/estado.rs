//! Estado (UF) lookup entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "estados")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub nome: String,

    /// Two-letter federal unit code (SP, RJ, ...)
    pub uf: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cidade::Entity")]
    Cidades,
}

impl Related<super::cidade::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cidades.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
