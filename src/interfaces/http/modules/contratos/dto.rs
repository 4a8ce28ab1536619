//! Contrato DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::contrato::Contrato;
use crate::infrastructure::database::entities::contrato;

#[derive(Debug, Serialize, ToSchema)]
pub struct ContratoDto {
    pub id: i32,
    pub codigo: String,
    pub imovel_id: i32,
    pub locador_id: i32,
    pub locatario_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiador_id: Option<i32>,
    pub data_inicio: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_fim: Option<NaiveDate>,
    pub valor_aluguel_centavos: i64,
    pub dia_vencimento: i32,
    pub status: String,
}

impl ContratoDto {
    pub fn from_domain(ct: Contrato) -> Self {
        Self {
            id: ct.id,
            codigo: ct.codigo,
            imovel_id: ct.imovel_id,
            locador_id: ct.locador_id,
            locatario_id: ct.locatario_id,
            fiador_id: ct.fiador_id,
            data_inicio: ct.data_inicio,
            data_fim: ct.data_fim,
            valor_aluguel_centavos: ct.valor_aluguel_centavos,
            dia_vencimento: ct.dia_vencimento as i32,
            status: ct.status.as_str().to_string(),
        }
    }
}

impl From<contrato::Model> for ContratoDto {
    fn from(m: contrato::Model) -> Self {
        Self {
            id: m.id,
            codigo: m.codigo,
            imovel_id: m.imovel_id,
            locador_id: m.locador_id,
            locatario_id: m.locatario_id,
            fiador_id: m.fiador_id,
            data_inicio: m.data_inicio,
            data_fim: m.data_fim,
            valor_aluguel_centavos: m.valor_aluguel_centavos,
            dia_vencimento: m.dia_vencimento,
            status: m.status,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateContratoRequest {
    #[validate(length(min = 1, max = 20))]
    pub codigo: String,
    pub imovel_id: i32,
    pub locador_id: i32,
    pub locatario_id: i32,
    pub fiador_id: Option<i32>,
    pub data_inicio: NaiveDate,
    #[validate(range(min = 1))]
    pub valor_aluguel_centavos: i64,
    /// Day of the month each cobrança falls due
    #[validate(range(min = 1, max = 28))]
    pub dia_vencimento: u8,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateContratoRequest {
    pub fiador_id: Option<i32>,
    #[validate(range(min = 1))]
    pub valor_aluguel_centavos: Option<i64>,
    #[validate(range(min = 1, max = 28))]
    pub dia_vencimento: Option<u8>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EncerrarContratoRequest {
    pub data_fim: NaiveDate,
}
