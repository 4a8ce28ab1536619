//! Cidade DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::infrastructure::database::entities::cidade;

#[derive(Debug, Serialize, ToSchema)]
pub struct CidadeDto {
    pub id: i32,
    pub estado_id: i32,
    pub nome: String,
    pub codigo: Option<String>,
}

impl From<cidade::Model> for CidadeDto {
    fn from(m: cidade::Model) -> Self {
        Self {
            id: m.id,
            estado_id: m.estado_id,
            nome: m.nome,
            codigo: m.codigo,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCidadeRequest {
    pub estado_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub nome: String,
    /// IBGE municipality code
    #[validate(length(max = 10))]
    pub codigo: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCidadeRequest {
    #[validate(length(min = 1, max = 100))]
    pub nome: Option<String>,
    #[validate(length(max = 10))]
    pub codigo: Option<String>,
}
