//! Lançamento financeiro entity
//!
//! One ledger line: rent received, owner transfer, maintenance expense.
//! `conta_bancaria_id` and `imovel_id` are optional — a lançamento avulso is
//! not tied to either.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lancamentos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(nullable)]
    pub conta_bancaria_id: Option<i32>,

    #[sea_orm(nullable)]
    pub imovel_id: Option<i32>,

    /// Free-form description of the movement
    pub historico: String,

    #[sea_orm(nullable)]
    pub numero_documento: Option<String>,

    /// Accounting period, "YYYY-MM"
    pub competencia: String,

    pub data_vencimento: Date,

    /// Amount in centavos, always positive; `tipo` carries the sign
    pub valor_centavos: i64,

    /// "C" (crédito) or "D" (débito)
    pub tipo: String,

    /// PENDENTE, PAGO, CANCELADO
    pub status: String,

    /// Matched against a bank statement line
    pub conciliado: bool,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::conta_bancaria::Entity",
        from = "Column::ContaBancariaId",
        to = "super::conta_bancaria::Column::Id"
    )]
    ContaBancaria,

    #[sea_orm(
        belongs_to = "super::imovel::Entity",
        from = "Column::ImovelId",
        to = "super::imovel::Column::Id"
    )]
    Imovel,
}

impl Related<super::conta_bancaria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContaBancaria.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
