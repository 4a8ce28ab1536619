//! Imóvel DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::imovel::{AtualizaImovel, Imovel, SituacaoImovel};
use crate::infrastructure::database::entities::imovel;

#[derive(Debug, Serialize, ToSchema)]
pub struct ImovelDto {
    pub id: i32,
    pub codigo_interno: String,
    pub tipo: String,
    pub endereco: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bairro_id: Option<i32>,
    pub proprietario_id: i32,
    pub situacao: String,
    pub disponivel_aluguel: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_aluguel_centavos: Option<i64>,
    pub qtd_quartos: i32,
}

impl ImovelDto {
    pub fn from_domain(im: Imovel) -> Self {
        Self {
            id: im.id,
            codigo_interno: im.codigo_interno,
            tipo: im.tipo,
            endereco: im.endereco,
            bairro_id: im.bairro_id,
            proprietario_id: im.proprietario_id,
            situacao: im.situacao.as_str().to_string(),
            disponivel_aluguel: im.disponivel_aluguel,
            valor_aluguel_centavos: im.valor_aluguel_centavos,
            qtd_quartos: im.qtd_quartos,
        }
    }
}

impl From<imovel::Model> for ImovelDto {
    fn from(m: imovel::Model) -> Self {
        Self {
            id: m.id,
            codigo_interno: m.codigo_interno,
            tipo: m.tipo,
            endereco: m.endereco,
            bairro_id: m.bairro_id,
            proprietario_id: m.proprietario_id,
            situacao: m.situacao,
            disponivel_aluguel: m.disponivel_aluguel,
            valor_aluguel_centavos: m.valor_aluguel_centavos,
            qtd_quartos: m.qtd_quartos,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateImovelRequest {
    #[validate(length(min = 1, max = 20))]
    pub codigo_interno: String,
    #[validate(length(min = 1, max = 50))]
    pub tipo: String,
    #[validate(length(min = 1, max = 200))]
    pub endereco: String,
    pub bairro_id: Option<i32>,
    pub proprietario_id: i32,
    #[serde(default)]
    pub disponivel_aluguel: bool,
    #[validate(range(min = 0))]
    pub valor_aluguel_centavos: Option<i64>,
    #[validate(range(min = 0, max = 50))]
    #[serde(default)]
    pub qtd_quartos: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateImovelRequest {
    #[validate(length(min = 1, max = 50))]
    pub tipo: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub endereco: Option<String>,
    pub bairro_id: Option<i32>,
    /// DISPONIVEL, ALUGADO, RESERVADO or INDISPONIVEL
    pub situacao: Option<String>,
    pub disponivel_aluguel: Option<bool>,
    #[validate(range(min = 0))]
    pub valor_aluguel_centavos: Option<i64>,
    #[validate(range(min = 0, max = 50))]
    pub qtd_quartos: Option<i32>,
}

impl UpdateImovelRequest {
    /// Convert to the domain payload; returns `None` for an unknown situação
    pub fn into_domain(self) -> Option<AtualizaImovel> {
        let situacao = match self.situacao {
            Some(raw) => Some(SituacaoImovel::from_str(&raw)?),
            None => None,
        };
        Some(AtualizaImovel {
            tipo: self.tipo,
            endereco: self.endereco,
            bairro_id: self.bairro_id,
            situacao,
            disponivel_aluguel: self.disponivel_aluguel,
            valor_aluguel_centavos: self.valor_aluguel_centavos,
            qtd_quartos: self.qtd_quartos,
        })
    }
}
