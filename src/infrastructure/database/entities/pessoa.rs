//! Pessoa entity
//!
//! Roles (locador/locatário/fiador) are independent flags: the same pessoa
//! may rent one property out while renting another in.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pessoas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub nome: String,

    /// CPF or CNPJ, digits only
    #[sea_orm(unique)]
    pub documento: String,

    /// "F" (física) or "J" (jurídica)
    pub fisica_juridica: String,

    #[sea_orm(nullable)]
    pub email: Option<String>,

    #[sea_orm(nullable)]
    pub telefone: Option<String>,

    pub locador: bool,
    pub locatario: bool,
    pub fiador: bool,
    pub ativo: bool,

    #[sea_orm(nullable, column_type = "Text")]
    pub observacoes: Option<String>,

    pub dt_cadastro: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::imovel::Entity")]
    Imoveis,
}

impl Related<super::imovel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Imoveis.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
