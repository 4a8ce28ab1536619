//! Lançamento DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::infrastructure::database::entities::lancamento;

#[derive(Debug, Serialize, ToSchema)]
pub struct LancamentoDto {
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conta_bancaria_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imovel_id: Option<i32>,
    pub historico: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_documento: Option<String>,
    pub competencia: String,
    pub data_vencimento: NaiveDate,
    pub valor_centavos: i64,
    pub tipo: String,
    pub status: String,
    pub conciliado: bool,
}

impl From<lancamento::Model> for LancamentoDto {
    fn from(m: lancamento::Model) -> Self {
        Self {
            id: m.id,
            conta_bancaria_id: m.conta_bancaria_id,
            imovel_id: m.imovel_id,
            historico: m.historico,
            numero_documento: m.numero_documento,
            competencia: m.competencia,
            data_vencimento: m.data_vencimento,
            valor_centavos: m.valor_centavos,
            tipo: m.tipo,
            status: m.status,
            conciliado: m.conciliado,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLancamentoRequest {
    pub conta_bancaria_id: Option<i32>,
    pub imovel_id: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub historico: String,
    #[validate(length(max = 30))]
    pub numero_documento: Option<String>,
    /// Accounting period, "YYYY-MM"
    #[validate(length(equal = 7))]
    pub competencia: String,
    pub data_vencimento: NaiveDate,
    #[validate(range(min = 1))]
    pub valor_centavos: i64,
    /// "C" (crédito) or "D" (débito)
    #[validate(length(equal = 1))]
    pub tipo: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLancamentoRequest {
    #[validate(length(min = 1, max = 200))]
    pub historico: Option<String>,
    #[validate(length(max = 30))]
    pub numero_documento: Option<String>,
    pub data_vencimento: Option<NaiveDate>,
    #[validate(range(min = 1))]
    pub valor_centavos: Option<i64>,
    /// PENDENTE, PAGO or CANCELADO
    pub status: Option<String>,
}
