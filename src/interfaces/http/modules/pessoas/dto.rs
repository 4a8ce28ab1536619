//! Pessoa DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::pessoa::{AtualizaPessoa, Pessoa};
use crate::infrastructure::database::entities::pessoa;

#[derive(Debug, Serialize, ToSchema)]
pub struct PessoaDto {
    pub id: i32,
    pub nome: String,
    pub documento: String,
    /// "F" (física) or "J" (jurídica)
    pub fisica_juridica: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    pub locador: bool,
    pub locatario: bool,
    pub fiador: bool,
    pub ativo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
    pub dt_cadastro: String,
}

impl PessoaDto {
    pub fn from_domain(p: Pessoa) -> Self {
        Self {
            id: p.id,
            nome: p.nome,
            documento: p.documento,
            fisica_juridica: p.natureza.as_str().to_string(),
            email: p.email,
            telefone: p.telefone,
            locador: p.locador,
            locatario: p.locatario,
            fiador: p.fiador,
            ativo: p.ativo,
            observacoes: p.observacoes,
            dt_cadastro: p.dt_cadastro.to_rfc3339(),
        }
    }
}

impl From<pessoa::Model> for PessoaDto {
    fn from(m: pessoa::Model) -> Self {
        Self {
            id: m.id,
            nome: m.nome,
            documento: m.documento,
            fisica_juridica: m.fisica_juridica,
            email: m.email,
            telefone: m.telefone,
            locador: m.locador,
            locatario: m.locatario,
            fiador: m.fiador,
            ativo: m.ativo,
            observacoes: m.observacoes,
            dt_cadastro: m.dt_cadastro.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePessoaRequest {
    #[validate(length(min = 1, max = 150))]
    pub nome: String,
    /// CPF (11 digits) or CNPJ (14 digits)
    #[validate(length(min = 11, max = 14))]
    pub documento: String,
    /// "F" or "J"
    #[validate(length(equal = 1))]
    pub fisica_juridica: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub telefone: Option<String>,
    #[serde(default)]
    pub locador: bool,
    #[serde(default)]
    pub locatario: bool,
    #[serde(default)]
    pub fiador: bool,
    pub observacoes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePessoaRequest {
    #[validate(length(min = 1, max = 150))]
    pub nome: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub telefone: Option<String>,
    pub locador: Option<bool>,
    pub locatario: Option<bool>,
    pub fiador: Option<bool>,
    pub ativo: Option<bool>,
    pub observacoes: Option<String>,
}

impl UpdatePessoaRequest {
    pub fn into_domain(self) -> AtualizaPessoa {
        AtualizaPessoa {
            nome: self.nome,
            email: self.email,
            telefone: self.telefone,
            locador: self.locador,
            locatario: self.locatario,
            fiador: self.fiador,
            ativo: self.ativo,
            observacoes: self.observacoes,
        }
    }
}
