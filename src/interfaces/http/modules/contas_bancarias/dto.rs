//! Conta bancária DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::infrastructure::database::entities::conta_bancaria;

#[derive(Debug, Serialize, ToSchema)]
pub struct ContaBancariaDto {
    pub id: i32,
    pub banco_codigo: String,
    pub banco_nome: String,
    pub agencia: String,
    pub codigo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digito: Option<String>,
    pub titular: String,
    pub principal: bool,
    pub ativo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
}

impl From<conta_bancaria::Model> for ContaBancariaDto {
    fn from(m: conta_bancaria::Model) -> Self {
        Self {
            id: m.id,
            banco_codigo: m.banco_codigo,
            banco_nome: m.banco_nome,
            agencia: m.agencia,
            codigo: m.codigo,
            digito: m.digito,
            titular: m.titular,
            principal: m.principal,
            ativo: m.ativo,
            descricao: m.descricao,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateContaBancariaRequest {
    /// Bank compensation code (e.g. "033")
    #[validate(length(min = 1, max = 5))]
    pub banco_codigo: String,
    #[validate(length(min = 1, max = 100))]
    pub banco_nome: String,
    #[validate(length(min = 1, max = 10))]
    pub agencia: String,
    #[validate(length(min = 1, max = 20))]
    pub codigo: String,
    #[validate(length(max = 2))]
    pub digito: Option<String>,
    #[validate(length(min = 1, max = 150))]
    pub titular: String,
    #[serde(default)]
    pub principal: bool,
    pub descricao: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateContaBancariaRequest {
    #[validate(length(min = 1, max = 150))]
    pub titular: Option<String>,
    pub principal: Option<bool>,
    pub ativo: Option<bool>,
    pub descricao: Option<String>,
}
