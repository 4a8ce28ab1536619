//! Boleto DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::boleto::Boleto;
use crate::infrastructure::database::entities::boleto;

#[derive(Debug, Serialize, ToSchema)]
pub struct BoletoDto {
    pub id: i32,
    pub contrato_id: i32,
    pub pagador_id: i32,
    pub nosso_numero: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seu_numero: Option<String>,
    pub valor_nominal_centavos: i64,
    pub data_emissao: NaiveDate,
    pub data_vencimento: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_pagamento: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_pago_centavos: Option<i64>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linha_digitavel: Option<String>,
}

impl BoletoDto {
    pub fn from_domain(b: Boleto) -> Self {
        Self {
            id: b.id,
            contrato_id: b.contrato_id,
            pagador_id: b.pagador_id,
            nosso_numero: b.nosso_numero,
            seu_numero: b.seu_numero,
            valor_nominal_centavos: b.valor_nominal_centavos,
            data_emissao: b.data_emissao,
            data_vencimento: b.data_vencimento,
            data_pagamento: b.data_pagamento,
            valor_pago_centavos: b.valor_pago_centavos,
            status: b.status.as_str().to_string(),
            linha_digitavel: b.linha_digitavel,
        }
    }
}

impl From<boleto::Model> for BoletoDto {
    fn from(m: boleto::Model) -> Self {
        Self {
            id: m.id,
            contrato_id: m.contrato_id,
            pagador_id: m.pagador_id,
            nosso_numero: m.nosso_numero,
            seu_numero: m.seu_numero,
            valor_nominal_centavos: m.valor_nominal_centavos,
            data_emissao: m.data_emissao,
            data_vencimento: m.data_vencimento,
            data_pagamento: m.data_pagamento,
            valor_pago_centavos: m.valor_pago_centavos,
            status: m.status,
            linha_digitavel: m.linha_digitavel,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBoletoRequest {
    pub contrato_id: i32,
    pub pagador_id: i32,
    #[validate(length(min = 1, max = 20))]
    pub nosso_numero: String,
    #[validate(length(max = 15))]
    pub seu_numero: Option<String>,
    #[validate(range(min = 1))]
    pub valor_nominal_centavos: i64,
    pub data_emissao: NaiveDate,
    pub data_vencimento: NaiveDate,
    #[validate(length(max = 60))]
    pub linha_digitavel: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegistrarPagamentoRequest {
    pub data_pagamento: NaiveDate,
    #[validate(range(min = 1))]
    pub valor_pago_centavos: i64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct MarcarVencidosRequest {
    /// Reference date; defaults to today
    pub data_referencia: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MarcarVencidosResponse {
    pub atualizados: u64,
}
