//! Conta bancária entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contas_bancarias")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Bank compensation code (e.g. "033")
    pub banco_codigo: String,

    pub banco_nome: String,

    pub agencia: String,

    /// Account number
    pub codigo: String,

    #[sea_orm(nullable)]
    pub digito: Option<String>,

    pub titular: String,

    /// Default account for new cobranças
    pub principal: bool,

    pub ativo: bool,

    #[sea_orm(nullable)]
    pub descricao: Option<String>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::lancamento::Entity")]
    Lancamentos,
}

impl Related<super::lancamento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lancamentos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
